use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskPayload};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

// Handlers share one service behind an Arc; cloning must not require a
// cloneable repository.
impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    ///
    /// Rejects the payload before any storage access when a field is empty.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: TaskPayload) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by id
    ///
    /// Lookup failures surface as not-found for this operation.
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: i64) -> TaskResult<Task> {
        match self.repository.get_by_id(id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => Err(TaskError::NotFound(id.to_string())),
            Err(err) => {
                tracing::warn!(task_id = id, error = %err, "Task lookup failed");
                Err(TaskError::NotFound(id.to_string()))
            }
        }
    }

    /// List every stored task
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Replace all mutable fields of a task
    ///
    /// Validates the payload like create does, then overwrites the row.
    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn update_task(&self, id: i64, input: TaskPayload) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    fn payload() -> TaskPayload {
        TaskPayload {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            due_date: "2024-01-01".to_string(),
            status: "open".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_field_before_storage() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().times(0);

        let service = TaskService::new(repo);

        let mut input = payload();
        input.description = String::new();

        let result = service.create_task(input).await;
        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_delegates_valid_payload() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().returning(|input| {
            Ok(Task {
                id: 1,
                title: input.title,
                description: input.description,
                due_date: input.due_date,
                status: input.status,
            })
        });

        let service = TaskService::new(repo);

        let task = service.create_task(payload()).await.unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);

        let result = service.get_task(99).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_lookup_failure_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(TaskError::Database("statement failed".to_string())));

        let service = TaskService::new(repo);

        let result = service.get_task(1).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_field_before_storage() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().times(0);

        let service = TaskService::new(repo);

        let mut input = payload();
        input.title = String::new();

        let result = service.update_task(1, input).await;
        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = TaskService::new(repo);

        let result = service.update_task(99, payload()).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(repo);

        let result = service.delete_task(99).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_task_succeeds() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let service = TaskService::new(repo);

        assert!(service.delete_task(1).await.is_ok());
    }
}
