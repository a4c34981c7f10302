use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::{DeleteConfirmation, Task, TaskPayload};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a task by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found")
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    // A non-numeric id cannot match any row
    let Ok(task_id) = id.parse::<i64>() else {
        return Err(TaskError::NotFound(id));
    };

    let task = service.get_task(task_id).await?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Invalid or missing fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<TaskPayload>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task id")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<TaskPayload>,
) -> TaskResult<Json<Task>> {
    let task_id: i64 = id
        .parse()
        .map_err(|_| TaskError::Validation("Invalid task id".to_string()))?;

    let task = service.update_task(task_id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = DeleteConfirmation),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<DeleteConfirmation>> {
    let task_id: i64 = id
        .parse()
        .map_err(|_| TaskError::Validation("Invalid task id".to_string()))?;

    service.delete_task(task_id).await?;
    Ok(Json(DeleteConfirmation::task_deleted()))
}
