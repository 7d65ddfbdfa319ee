/// Authentication endpoints
///
/// This module provides user authentication endpoints:
/// - Registration
/// - Login
///
/// # Endpoints
///
/// - `POST /api/register` - Register new user
/// - `POST /api/login` - Login and get a bearer token

use crate::{
    app::AppState,
    error::{ApiResult, AppJson},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskhive_core::{
    auth::jwt::{self, Claims},
    models::user::{CreateUser, UserSummary},
};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name, unique alongside email
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (hashed before storage; plaintext never persisted)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation
    pub message: String,

    /// The created account, hash excluded
    pub user: UserSummary,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token (24h)
    pub token: String,

    /// The authenticated account, hash excluded
    pub user: UserSummary,
}

/// Register a new user
///
/// Creates a new account. Email and username must both be unused; the
/// password is hashed before it ever reaches the store.
///
/// # Endpoint
///
/// ```text
/// POST /api/register
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "hunter22"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "User created successfully",
///   "user": {
///     "id": "uuid",
///     "username": "alice",
///     "email": "alice@example.com"
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or malformed body
/// - `409 Conflict`: Email or username already taken
/// - `500 Internal Server Error`: Server error
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    let user = state.users.register(CreateUser {
        username: req.username,
        email: req.email,
        password: req.password,
    })?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user: UserSummary::from(&user),
        }),
    ))
}

/// Login endpoint
///
/// Authenticates a user and returns a signed bearer token good for 24 hours.
/// An unknown email and a wrong password produce the same 401 body, so the
/// response never reveals which accounts exist.
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// {
///   "email": "alice@example.com",
///   "password": "hunter22"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "token": "eyJ...",
///   "user": {
///     "id": "uuid",
///     "username": "alice",
///     "email": "alice@example.com"
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or malformed body
/// - `401 Unauthorized`: Invalid credentials
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;

    let user = state.users.authenticate(&req.email, &req.password)?;

    let claims = Claims::new(user.id, user.email.clone());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserSummary::from(&user),
    }))
}
