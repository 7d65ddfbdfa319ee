/// Task CRUD endpoints
///
/// This module provides task management endpoints. All endpoints require
/// JWT authentication, and every operation is scoped to the caller: a task
/// belonging to another user is indistinguishable from one that does not
/// exist.
///
/// # Endpoints
///
/// - `GET /api/tasks` - List caller's tasks
/// - `POST /api/tasks` - Create task
/// - `GET /api/tasks/:id` - Fetch a single task
/// - `PUT /api/tasks/:id` - Update task fields
/// - `DELETE /api/tasks/:id` - Delete task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, AppJson},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskhive_core::{
    auth::middleware::AuthContext,
    models::task::{CreateTask, Task, UpdateTask},
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Free-form description, empty when omitted
    #[serde(default)]
    pub description: String,

    /// Status label, "pending" when omitted
    #[serde(default = "default_status")]
    pub status: String,

    /// Priority label, "medium" when omitted
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Optional due date (ISO 8601)
    pub due_date: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "pending".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Delete task response
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Parses a path segment as a task id
///
/// Route paths capture `:id` as a raw string so that a non-UUID segment
/// renders the standard `{"error"}` body instead of axum's plain-text
/// path rejection.
fn parse_task_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse()
        .map_err(|_| ApiError::BadRequest("Invalid task ID".to_string()))
}

/// List tasks
///
/// Returns every task owned by the caller, most recently created first.
///
/// # Endpoint
///
/// ```text
/// GET /api/tasks
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": "uuid",
///     "title": "Ship the release",
///     "description": "",
///     "status": "pending",
///     "priority": "high",
///     "due_date": null,
///     "user_id": "uuid",
///     "created_at": "2025-01-03T12:00:00Z",
///     "updated_at": "2025-01-03T12:00:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid JWT token
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list(auth.user_id)))
}

/// Create task
///
/// Creates a task owned by the caller. Omitted fields fall back to their
/// defaults: empty description, "pending" status, "medium" priority.
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Authorization: Bearer <jwt_token>
/// Content-Type: application/json
///
/// {
///   "title": "Ship the release",
///   "priority": "high",
///   "due_date": "2025-02-01T00:00:00Z"
/// }
/// ```
///
/// # Response
///
/// The created task, as in the list response, with status `201 Created`.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or malformed body
/// - `401 Unauthorized`: Missing or invalid JWT token
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    AppJson(req): AppJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    let task = state.tasks.create(
        auth.user_id,
        CreateTask {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
            due_date: req.due_date,
        },
    );

    tracing::info!(user_id = %auth.user_id, task_id = %task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Fetch a single task
///
/// # Endpoint
///
/// ```text
/// GET /api/tasks/:id
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not a UUID
/// - `401 Unauthorized`: Missing or invalid JWT token
/// - `404 Not Found`: No such task owned by the caller
pub async fn get_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let task_id = parse_task_id(&id)?;

    let task = state.tasks.get(auth.user_id, task_id)?;
    Ok(Json(task))
}

/// Update task fields
///
/// Partial update: absent fields are left unchanged, present fields
/// overwrite, including an explicit empty string. The due date can be set
/// this way but not cleared.
///
/// # Endpoint
///
/// ```text
/// PUT /api/tasks/:id
/// Authorization: Bearer <jwt_token>
/// Content-Type: application/json
///
/// {
///   "status": "completed"
/// }
/// ```
///
/// # Response
///
/// The updated task with a refreshed `updated_at`.
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not a UUID, or malformed body
/// - `401 Unauthorized`: Missing or invalid JWT token
/// - `404 Not Found`: No such task owned by the caller
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateTask>,
) -> ApiResult<Json<Task>> {
    let task_id = parse_task_id(&id)?;

    let task = state.tasks.update(auth.user_id, task_id, req)?;

    tracing::info!(user_id = %auth.user_id, task_id = %task.id, "task updated");

    Ok(Json(task))
}

/// Delete task
///
/// # Endpoint
///
/// ```text
/// DELETE /api/tasks/:id
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Task deleted"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not a UUID
/// - `401 Unauthorized`: Missing or invalid JWT token
/// - `404 Not Found`: No such task owned by the caller
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let task_id = parse_task_id(&id)?;

    state.tasks.delete(auth.user_id, task_id)?;

    tracing::info!(user_id = %auth.user_id, task_id = %task_id, "task deleted");

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted".to_string(),
    }))
}
