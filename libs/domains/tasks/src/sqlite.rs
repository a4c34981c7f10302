use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::TaskResult,
    models::{Task, TaskPayload},
    repository::TaskRepository,
};

/// SQLite-backed repository
///
/// Every operation executes exactly one statement against the store.
pub struct SqliteTaskRepository {
    db: DatabaseConnection,
}

impl SqliteTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, input: TaskPayload) -> TaskResult<Task> {
        // Convert TaskPayload to ActiveModel; the store assigns the id
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, input: TaskPayload) -> TaskResult<Option<Task>> {
        // Single UPDATE statement; the affected-row count distinguishes a
        // missing row from a successful overwrite.
        let replacement = entity::ActiveModel {
            id: NotSet,
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            due_date: Set(input.due_date.clone()),
            status: Set(input.status.clone()),
        };

        let result = entity::Entity::update_many()
            .set(replacement)
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::info!(task_id = id, "Updated task");
        Ok(Some(Task {
            id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
        }))
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
