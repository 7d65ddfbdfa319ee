/// Bearer authentication support for Axum handlers
///
/// The API protects its task and user routes with a single middleware layer
/// that validates the `Authorization: Bearer <token>` header and stashes an
/// [`AuthContext`] in the request extensions. This module holds the context
/// type and the header-to-context steps; the HTTP layer itself lives in the
/// API crate where it can render errors in the API's response shape.
///
/// # Request Extensions
///
/// After successful authentication the request carries:
/// - `AuthContext`: the authenticated user's id and email
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use taskhive_core::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, {}!", auth.email)
/// }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::{validate_token, Claims, JwtError};

/// Authentication context added to request extensions
///
/// Identity comes entirely from validated token claims; no store lookup
/// happens on the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,

    /// Authenticated user email
    pub email: String,
}

impl AuthContext {
    /// Creates auth context from validated JWT claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email.clone(),
        }
    }
}

/// Error type for bearer authentication
///
/// Every variant renders as 401 at the HTTP layer. A malformed header is as
/// unauthenticated as a missing one.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Missing authorization header
    #[error("Authorization header required")]
    MissingCredentials,

    /// Header present but not a Bearer credential
    #[error("Invalid authorization format")]
    InvalidFormat,

    /// Token validation failed
    #[error("Invalid token")]
    InvalidToken(#[source] JwtError),
}

/// Extracts the bearer token from request headers.
///
/// # Errors
///
/// - `AuthError::MissingCredentials` if there is no `Authorization` header
/// - `AuthError::InvalidFormat` if the header isn't `Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)
}

/// Authenticates a request from its headers.
///
/// Extracts the bearer token, validates it against the signing secret, and
/// builds the [`AuthContext`] for downstream handlers.
///
/// # Errors
///
/// Returns [`AuthError`] if the header is missing or malformed, or if the
/// token is expired, tampered with, mis-issued, or signed differently.
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use taskhive_core::auth::jwt::{create_token, Claims};
/// use taskhive_core::auth::middleware::authenticate;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "your-secret-key-at-least-32-bytes";
/// let claims = Claims::new(Uuid::new_v4(), "alice@example.com".to_string());
/// let token = create_token(&claims, secret)?;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     header::AUTHORIZATION,
///     HeaderValue::from_str(&format!("Bearer {}", token))?,
/// );
///
/// let auth = authenticate(&headers, secret)?;
/// assert_eq!(auth.email, "alice@example.com");
/// # Ok(())
/// # }
/// ```
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let token = bearer_token(headers)?;

    let claims = validate_token(token, secret).map_err(AuthError::InvalidToken)?;

    Ok(AuthContext::from_claims(&claims))
}
