/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - App construction with a fixed test configuration
/// - A request driver that returns status plus parsed JSON
/// - Registration / login helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use taskhive_api::app::{build_router, AppState};
use taskhive_api::config::{ApiConfig, Config, JwtConfig};
use tower::Service as _;

/// Signing secret shared by every test context (32+ chars)
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test context containing the app under test
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
}

impl TestContext {
    /// Creates a new test context with empty stores
    pub fn new() -> Self {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            jwt: JwtConfig {
                secret: TEST_SECRET.to_string(),
            },
        };

        let state = AppState::new(config);
        let app = build_router(state.clone());

        TestContext { app, state }
    }

    /// Sends a request and returns the status plus parsed JSON body
    ///
    /// `token`, when present, is sent as `Authorization: Bearer <token>`.
    /// An empty response body parses as JSON null.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

/// Registers a user, asserting success, and returns the response body
pub async fn register_user(
    ctx: &TestContext,
    username: &str,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let (status, body) = ctx
        .send(
            "POST",
            "/api/register",
            None,
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    body
}

/// Logs a user in, asserting success, and returns the bearer token
pub async fn login_user(ctx: &TestContext, email: &str, password: &str) -> String {
    let (status, body) = ctx
        .send(
            "POST",
            "/api/login",
            None,
            Some(json!({
                "email": email,
                "password": password,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Registers and logs in a user, returning the bearer token
pub async fn register_and_login(
    ctx: &TestContext,
    username: &str,
    email: &str,
    password: &str,
) -> String {
    register_user(ctx, username, email, password).await;
    login_user(ctx, email, password).await
}

/// Creates a task for the token's owner, asserting success
pub async fn create_task(
    ctx: &TestContext,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let (status, task) = ctx.send("POST", "/api/tasks", Some(token), Some(body)).await;

    assert_eq!(status, StatusCode::CREATED, "create task failed: {}", task);
    task
}
