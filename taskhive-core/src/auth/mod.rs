/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: session token generation and validation
/// - [`middleware`]: bearer-header authentication for Axum routes
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Session Tokens**: HS256 signing, 24 hour expiration, pinned algorithm
/// - **Constant-time Comparison**: password verification never short-circuits
///
/// # Example
///
/// ```no_run
/// use taskhive_core::auth::password::{hash_password, verify_password};
/// use taskhive_core::auth::jwt::{create_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Password authentication
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// // Session token issuance
/// let claims = Claims::new(Uuid::new_v4(), "alice@example.com".to_string());
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
