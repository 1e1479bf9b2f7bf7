//! Todo API server
//!
//! Serves the task CRUD endpoints under `/api/tasks`, persisting the whole
//! list to a single JSON document.

pub mod config;
pub mod openapi;
pub mod ready;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::{AppInfo, cors::CorsConfig};
use domain_tasks::{TaskService, TaskStore, handlers};
use std::io;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes<S: TaskStore + 'static>(service: TaskService<S>) -> Router {
    Router::new().nest("/tasks", handlers::router(service))
}

/// Assemble the full application router.
///
/// - `/api/tasks`: task CRUD
/// - `/api-docs/openapi.json`: generated OpenAPI document
/// - `/health`: liveness with app name/version
/// - `/ready`: readiness, reads the task document
///
/// All of them sit behind the same origin guard, CORS, tracing and
/// security headers.
pub fn build_app<S: TaskStore + 'static>(
    service: TaskService<S>,
    app: AppInfo,
    cors: &CorsConfig,
) -> io::Result<Router> {
    let root = health_router(app).merge(ready::ready_router(service.clone()));

    create_router::<openapi::ApiDoc>(routes(service), root, cors)
}
