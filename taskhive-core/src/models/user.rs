/// User model
///
/// A user account: login identity plus an Argon2id credential. Records live
/// in the in-memory [`UserStore`](crate::store::users::UserStore); this
/// module only defines the shapes.
///
/// # Example
///
/// ```
/// use taskhive_core::models::user::{User, UserSummary};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let user = User {
///     id: Uuid::new_v4(),
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     created_at: Utc::now(),
/// };
///
/// // The wire view never carries the hash
/// let summary = UserSummary::from(&user);
/// assert_eq!(summary.email, "alice@example.com");
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account record
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
/// `password_hash` is skipped during serialization, so a `User` can be
/// returned from a handler directly without leaking the credential.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Display/login name
    ///
    /// Must be unique across all users
    pub username: String,

    /// Email address
    ///
    /// Must be unique across all users (case-sensitive as given)
    pub email: String,

    /// Argon2id password hash
    ///
    /// Never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, embedded in register/login responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique user ID
    pub id: Uuid,

    /// Display/login name
    pub username: String,

    /// Email address
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Input for registering a new user
///
/// Carries the plaintext password; the store hashes it before anything is
/// kept. The plaintext never outlives the registration call.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired username
    pub username: String,

    /// Email address
    pub email: String,

    /// Plaintext password (hashed by the store)
    pub password: String,
}
