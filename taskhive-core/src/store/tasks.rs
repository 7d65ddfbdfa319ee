/// Task store
///
/// Holds every user's tasks for the lifetime of the process, keyed by owner
/// id with the owner's tasks in creation order. Every operation takes the
/// caller's owner id and can only see that owner's slice of the data; a
/// task under a different owner behaves exactly like a task that doesn't
/// exist.
///
/// # Ordering contract
///
/// [`TaskStore::list`] returns tasks most-recent-first. Internally tasks
/// append in creation order (the append happens under the same exclusive
/// acquisition that stamps the record) and `list` walks the collection
/// backwards.
///
/// # Example
///
/// ```
/// use taskhive_core::models::task::CreateTask;
/// use taskhive_core::store::tasks::TaskStore;
/// use uuid::Uuid;
///
/// let store = TaskStore::new();
/// let owner = Uuid::new_v4();
///
/// let task = store.create(owner, CreateTask {
///     title: "Buy milk".to_string(),
///     description: String::new(),
///     status: "pending".to_string(),
///     priority: "low".to_string(),
///     due_date: None,
/// });
///
/// assert_eq!(store.list(owner).len(), 1);
/// assert!(store.get(owner, task.id).is_ok());
/// ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::store::StoreError;

/// Cloneable handle to the in-memory task collections
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    inner: Arc<RwLock<HashMap<Uuid, Vec<Task>>>>,
}

impl TaskStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all of `owner`'s tasks, most-recent-first.
    ///
    /// An owner with no tasks gets an empty vec, not an error.
    pub fn list(&self, owner: Uuid) -> Vec<Task> {
        let tasks = self.inner.read();

        tasks
            .get(&owner)
            .map(|owned| owned.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Creates a task under `owner` and returns the stored record.
    ///
    /// The id is a fresh v4 UUID, so rapid concurrent creation can't
    /// collide. Stamping and append happen under one exclusive
    /// acquisition, which is what makes append order the creation order.
    pub fn create(&self, owner: Uuid, data: CreateTask) -> Task {
        let mut tasks = self.inner.write();

        let task = Task::new(owner, data);
        tasks.entry(owner).or_default().push(task.clone());

        tracing::debug!(user_id = %owner, task_id = %task.id, "stored new task");

        task
    }

    /// Looks up one of `owner`'s tasks by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TaskNotFound` if no task with that id exists
    /// under that owner. Existence under a different owner is
    /// indistinguishable from non-existence.
    pub fn get(&self, owner: Uuid, id: Uuid) -> Result<Task, StoreError> {
        let tasks = self.inner.read();

        tasks
            .get(&owner)
            .and_then(|owned| owned.iter().find(|t| t.id == id))
            .cloned()
            .ok_or(StoreError::TaskNotFound)
    }

    /// Applies a partial update to one of `owner`'s tasks.
    ///
    /// Find and mutate run under one exclusive acquisition. Fields absent
    /// from `update` keep their stored values; `updated_at` is bumped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TaskNotFound` under the same rule as
    /// [`TaskStore::get`]
    pub fn update(&self, owner: Uuid, id: Uuid, update: UpdateTask) -> Result<Task, StoreError> {
        let mut tasks = self.inner.write();

        let task = tasks
            .get_mut(&owner)
            .and_then(|owned| owned.iter_mut().find(|t| t.id == id))
            .ok_or(StoreError::TaskNotFound)?;

        task.apply(update);

        tracing::debug!(user_id = %owner, task_id = %id, "applied task update");

        Ok(task.clone())
    }

    /// Deletes one of `owner`'s tasks.
    ///
    /// A second delete of the same id reports `TaskNotFound`, same as an
    /// id that never existed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TaskNotFound` under the same rule as
    /// [`TaskStore::get`]
    pub fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut tasks = self.inner.write();

        let owned = tasks.get_mut(&owner).ok_or(StoreError::TaskNotFound)?;

        let before = owned.len();
        owned.retain(|t| t.id != id);

        if owned.len() == before {
            return Err(StoreError::TaskNotFound);
        }

        tracing::debug!(user_id = %owner, task_id = %id, "removed task");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: String::new(),
            status: "pending".to_string(),
            priority: "medium".to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let created = store.create(owner, new_task("Buy milk"));

        let fetched = store.get(owner, created.id).expect("Should find task");
        assert_eq!(fetched.title, "Buy milk");
        assert_eq!(fetched.user_id, owner);
    }

    #[test]
    fn test_list_empty_owner() {
        let store = TaskStore::new();
        assert!(store.list(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_list_most_recent_first() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let first = store.create(owner, new_task("first"));
        let second = store.create(owner, new_task("second"));
        let third = store.create(owner, new_task("third"));

        let listed = store.list(owner);
        let ids: Vec<Uuid> = listed.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn test_get_scoped_to_owner() {
        let store = TaskStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let alices_task = store.create(alice, new_task("private"));

        // Bob sees Alice's task id as nonexistent
        let result = store.get(bob, alices_task.id);
        assert!(matches!(result, Err(StoreError::TaskNotFound)));
    }

    #[test]
    fn test_update_partial() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let created = store.create(owner, new_task("original"));

        let updated = store
            .update(
                owner,
                created.id,
                UpdateTask {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .expect("Should update");

        assert_eq!(updated.title, "original");
        assert_eq!(updated.status, "completed");

        // Merge landed in the store, not just the returned copy
        let fetched = store.get(owner, created.id).unwrap();
        assert_eq!(fetched.status, "completed");
    }

    #[test]
    fn test_update_scoped_to_owner() {
        let store = TaskStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let alices_task = store.create(alice, new_task("private"));

        let result = store.update(
            bob,
            alices_task.id,
            UpdateTask {
                title: Some("hijacked".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(StoreError::TaskNotFound)));

        // Unchanged for the real owner
        assert_eq!(store.get(alice, alices_task.id).unwrap().title, "private");
    }

    #[test]
    fn test_delete_then_delete_again() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let created = store.create(owner, new_task("doomed"));

        store.delete(owner, created.id).expect("First delete succeeds");

        let second = store.delete(owner, created.id);
        assert!(matches!(second, Err(StoreError::TaskNotFound)));

        assert!(matches!(
            store.get(owner, created.id),
            Err(StoreError::TaskNotFound)
        ));
    }

    #[test]
    fn test_delete_scoped_to_owner() {
        let store = TaskStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let alices_task = store.create(alice, new_task("private"));

        let result = store.delete(bob, alices_task.id);
        assert!(matches!(result, Err(StoreError::TaskNotFound)));

        // Still there for Alice
        assert!(store.get(alice, alices_task.id).is_ok());
    }

    #[test]
    fn test_delete_only_removes_target() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let keep = store.create(owner, new_task("keep"));
        let drop = store.create(owner, new_task("drop"));

        store.delete(owner, drop.id).expect("Should delete");

        let remaining = store.list(owner);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}
