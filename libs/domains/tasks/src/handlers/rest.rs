use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_helpers::{AppError, ErrorResponse, ValidatedJson};
use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{Task, TaskInput};
use crate::repository::TaskStore;
use crate::service::TaskService;

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, description = "Task storage failure", body = ErrorResponse)
    )
)]
pub async fn list_tasks<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Task storage failure", body = ErrorResponse)
    )
)]
pub async fn get_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(&id).await?;
    Ok(Json(task))
}

/// Create a new task
///
/// The server assigns `id` and `dateCreated`.
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing title", body = ErrorResponse),
        (status = 500, description = "Task storage failure", body = ErrorResponse)
    )
)]
pub async fn create_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace a task
///
/// All fields except `id` and `dateCreated` are overwritten. The body is
/// validated by the service once the task is known to exist, so an unknown
/// id is a 404 whatever the payload.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Missing title", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Task storage failure", body = ErrorResponse)
    )
)]
pub async fn update_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let Json(input) = payload?;
    let task = service.update_task(&id, input).await?;
    Ok(Json(task))
}

/// Delete a task, returning it
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Task storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    let task = service.delete_task(&id).await?;
    Ok(Json(task))
}
