//! Readiness endpoint backed by a real read of the task document.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_tasks::{TaskService, TaskStore};

/// Readiness check: the task document must be readable and parseable.
pub async fn ready_handler<S: TaskStore + 'static>(
    State(service): State<TaskService<S>>,
) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "storage",
        Box::pin(async {
            service
                .store()
                .read_all()
                .await
                .map(|_| ())
                .map_err(|e| format!("Task document unreadable: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

/// Router with the `/ready` endpoint, state already applied
pub fn ready_router<S: TaskStore + 'static>(service: TaskService<S>) -> Router {
    Router::new()
        .route("/ready", get(ready_handler::<S>))
        .with_state(service)
}
