use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{Task, TaskPayload};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (SQLite, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task and return it with its assigned id
    async fn create(&self, input: TaskPayload) -> TaskResult<Task>;

    /// Get a task by id
    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// List every stored task, ordered by id
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Overwrite all mutable fields of an existing task
    ///
    /// Returns `None` when no row matched the id.
    async fn update(&self, id: i64, input: TaskPayload) -> TaskResult<Option<Task>>;

    /// Delete a task by id; `false` when no row matched
    async fn delete(&self, id: i64) -> TaskResult<bool>;
}
