/// Data models
///
/// Plain record shapes shared between the stores and the API layer.
/// Operations on these records live in [`crate::store`].
///
/// # Models
///
/// - `user`: user accounts and their public views
/// - `task`: per-user to-do items and create/update inputs
///
/// # Example
///
/// ```
/// use taskhive_core::models::task::{CreateTask, Task};
/// use uuid::Uuid;
///
/// let task = Task::new(
///     Uuid::new_v4(),
///     CreateTask {
///         title: "Water the plants".to_string(),
///         description: String::new(),
///         status: "pending".to_string(),
///         priority: "low".to_string(),
///         due_date: None,
///     },
/// );
/// assert_eq!(task.priority, "low");
/// ```

pub mod task;
pub mod user;
