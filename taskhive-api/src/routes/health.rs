/// Health check endpoint
///
/// Provides a simple liveness check. There is no backing database to probe,
/// so a running process is a healthy process.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "Server is running",
///   "time": "2025-01-03T12:00:00+00:00"
/// }
/// ```

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Human-readable status line
    pub message: String,

    /// Current server time (RFC3339)
    pub time: String,
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}
