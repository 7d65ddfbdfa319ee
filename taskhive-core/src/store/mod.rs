/// In-memory stores
///
/// Process-lifetime storage for users and tasks. Each store is a cheap
/// cloneable handle over an `Arc<parking_lot::RwLock<HashMap<..>>>`; clones
/// share the same data, so the API can keep one handle per store in its
/// state and hand copies to every request.
///
/// # Lock discipline
///
/// One reader-writer lock guards each collection. Writers (register,
/// create/update/delete) take exclusive access; readers (list/get,
/// authenticate lookup) take shared access. Compound read-modify-write
/// sequences run under a single acquisition, and no lock is ever held
/// across an await point or while password hashing runs.
///
/// # Modules
///
/// - [`users`]: credential store (register, authenticate, lookup)
/// - [`tasks`]: task store (owner-scoped CRUD)

pub mod tasks;
pub mod users;

use crate::auth::password::PasswordError;

/// Error type for store operations
///
/// Display strings double as the stable client-facing messages; anything
/// carrying internal detail stays out of this enum.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Registration collided with an existing email or username
    #[error("User already exists")]
    Conflict,

    /// Unknown email or wrong password; the two are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No such user
    #[error("User not found")]
    UserNotFound,

    /// No task with that id under that owner
    #[error("Task not found")]
    TaskNotFound,

    /// Password hashing or verification failed unexpectedly
    #[error(transparent)]
    Password(#[from] PasswordError),
}
