/// Credential store
///
/// Holds every user account for the lifetime of the process, keyed by id.
/// Email and username uniqueness is enforced with a scan under the same
/// exclusive lock acquisition that performs the insert, so two concurrent
/// registrations can never both claim the same identity.
///
/// # Example
///
/// ```
/// use taskhive_core::models::user::CreateUser;
/// use taskhive_core::store::users::UserStore;
///
/// # fn example() -> Result<(), taskhive_core::store::StoreError> {
/// let store = UserStore::new();
///
/// let user = store.register(CreateUser {
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password: "correct horse".to_string(),
/// })?;
///
/// let authed = store.authenticate("alice@example.com", "correct horse")?;
/// assert_eq!(authed.id, user.id);
/// # Ok(())
/// # }
/// ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::models::user::{CreateUser, User};
use crate::store::StoreError;

/// Cloneable handle to the in-memory user collection
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user.
    ///
    /// The password is hashed before the lock is taken; Argon2id is tuned
    /// to take on the order of 100ms and must not stall other requests.
    /// The uniqueness scan and the insert then happen under one exclusive
    /// acquisition.
    ///
    /// # Errors
    ///
    /// - `StoreError::Conflict` if any existing user has the same email or
    ///   username (case-sensitive as given)
    /// - `StoreError::Password` if hashing fails
    pub fn register(&self, data: CreateUser) -> Result<User, StoreError> {
        let password_hash = hash_password(&data.password)?;

        let mut users = self.inner.write();

        if users
            .values()
            .any(|u| u.email == data.email || u.username == data.username)
        {
            return Err(StoreError::Conflict);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            password_hash,
            created_at: Utc::now(),
        };

        users.insert(user.id, user.clone());

        tracing::debug!(user_id = %user.id, "registered user");

        Ok(user)
    }

    /// Verifies an email/password pair and returns the matching user.
    ///
    /// The record is cloned out under a shared lock and the verification
    /// cost is paid with no lock held. An unknown email and a wrong
    /// password produce the same error, so callers can't probe which
    /// emails are registered.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidCredentials` if the email is unknown or the
    ///   password doesn't verify
    /// - `StoreError::Password` if the stored hash can't be processed
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let user = {
            let users = self.inner.read();
            users.values().find(|u| u.email == email).cloned()
        };

        let user = user.ok_or(StoreError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(StoreError::InvalidCredentials);
        }

        tracing::debug!(user_id = %user.id, "credentials verified");

        Ok(user)
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if absent
    pub fn get(&self, id: Uuid) -> Result<User, StoreError> {
        self.inner
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }
}
