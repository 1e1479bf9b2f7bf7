mod rest;

use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Task, TaskInput, TaskPriority};
use crate::repository::TaskStore;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::list_tasks,
        rest::get_task,
        rest::create_task,
        rest::update_task,
        rest::delete_task,
    ),
    components(
        schemas(Task, TaskInput, TaskPriority, axum_helpers::ErrorResponse)
    ),
    tags(
        (name = "tasks", description = "Task list operations")
    )
)]
pub struct ApiDoc;

/// Create the tasks router (mount under `/tasks`)
pub fn router<S: TaskStore + 'static>(service: TaskService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(rest::list_tasks).post(rest::create_task))
        .route(
            "/{id}",
            get(rest::get_task)
                .put(rest::update_task)
                .delete(rest::delete_task),
        )
        .with_state(shared_service)
}
