/// Task model
///
/// A task is a personal to-do item owned by exactly one user. Records live
/// in the in-memory [`TaskStore`](crate::store::tasks::TaskStore), keyed by
/// owner; this module defines the record shape and the partial-update merge.
///
/// `status` and `priority` are open strings. The conventional vocabulary is
/// "pending"/"in_progress"/"completed" and "low"/"medium"/"high", but the
/// server does not constrain it.
///
/// # Example
///
/// ```
/// use taskhive_core::models::task::{CreateTask, Task, UpdateTask};
/// use uuid::Uuid;
///
/// let task = Task::new(
///     Uuid::new_v4(),
///     CreateTask {
///         title: "Write report".to_string(),
///         description: "Q3 numbers".to_string(),
///         status: "pending".to_string(),
///         priority: "high".to_string(),
///         due_date: None,
///     },
/// );
///
/// assert_eq!(task.status, "pending");
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Status (open string, conventionally "pending"/"in_progress"/"completed")
    pub status: String,

    /// Priority (open string, conventionally "low"/"medium"/"high")
    pub priority: String,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Owning user's ID
    pub user_id: Uuid,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task
///
/// The caller supplies content fields only; id, owner, and timestamps are
/// stamped by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Initial status
    pub status: String,

    /// Initial priority
    pub priority: String,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Input for partially updating a task
///
/// Every field is optional: a field that is absent (or JSON `null`) leaves
/// the stored value unchanged, a field that is present overwrites it, even
/// with an empty string. Consequence: `due_date` can be set but not cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<String>,

    /// New priority
    pub priority: Option<String>,

    /// New due date
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Builds a fresh task for `owner` with a new v4 id and current
    /// timestamps.
    pub fn new(owner: Uuid, data: CreateTask) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            user_id: owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a partial update into this task and bumps `updated_at`.
    ///
    /// Only fields present in `update` are overwritten.
    pub fn apply(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }

        self.updated_at = Utc::now();
    }
}
