/// Current-account endpoint
///
/// # Endpoints
///
/// - `GET /api/user` - Fetch the authenticated user's account

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Json};
use taskhive_core::{auth::middleware::AuthContext, models::user::User};

/// Fetch the authenticated user
///
/// Returns the full account record for the token's subject. The password
/// hash is never serialized.
///
/// # Endpoint
///
/// ```text
/// GET /api/user
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "uuid",
///   "username": "alice",
///   "email": "alice@example.com",
///   "created_at": "2025-01-03T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid JWT token
/// - `404 Not Found`: Token subject no longer exists
pub async fn current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<User>> {
    let user = state.users.get(auth.user_id)?;
    Ok(Json(user))
}
