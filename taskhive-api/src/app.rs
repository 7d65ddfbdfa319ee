/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskhive_api::{app::AppState, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(config);
/// let app = taskhive_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use taskhive_core::auth::middleware;
use taskhive_core::store::{tasks::TaskStore, users::UserStore};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The stores and config use Arc internally for cheap cloning, so every
/// clone observes the same data.
#[derive(Clone)]
pub struct AppState {
    /// Registered user accounts
    pub users: UserStore,

    /// Tasks, partitioned by owner
    pub tasks: TaskStore,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state with empty stores
    pub fn new(config: Config) -> Self {
        Self {
            users: UserStore::new(),
            tasks: TaskStore::new(),
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health                  # Health check (public)
/// └── /api/
///     ├── POST /register       # Create account (public)
///     ├── POST /login          # Issue bearer token (public)
///     ├── GET  /user           # Current account (authenticated)
///     └── /tasks               # Task CRUD (authenticated)
///         ├── GET    /
///         ├── POST   /
///         ├── GET    /:id
///         ├── PUT    /:id
///         └── DELETE /:id
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route basis)
///
/// # Example
///
/// ```no_run
/// use taskhive_api::app::{AppState, build_router};
/// use taskhive_api::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(config);
///
/// let app = build_router(state);
///
/// // Start server
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Task and account routes (require JWT authentication)
    let protected_routes = Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/user", get(routes::users::current_user))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    // Build complete /api surface
    let api_routes = Router::new().merge(auth_routes).merge(protected_routes);

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Validates the bearer token from the Authorization header, then injects
/// an `AuthContext` into request extensions for handlers to extract.
/// Every failure mode (missing header, malformed header, bad token) is a
/// 401 with the `{"error"}` body.
async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context = middleware::authenticate(req.headers(), state.jwt_secret())?;

    // Insert into request extensions
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, JwtConfig};

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            jwt: JwtConfig {
                secret: "test-secret-key-that-is-at-least-32-chars".to_string(),
            },
        }
    }

    #[test]
    fn test_app_state_clones_share_stores() {
        let state = AppState::new(test_config());
        let clone = state.clone();

        let user = state
            .users
            .register(taskhive_core::models::user::CreateUser {
                username: "shared".to_string(),
                email: "shared@example.com".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();

        // The clone sees the registration made through the original
        assert_eq!(clone.users.get(user.id).unwrap().email, "shared@example.com");
    }

    #[test]
    fn test_build_router() {
        let state = AppState::new(test_config());
        let _app = build_router(state);
    }
}
