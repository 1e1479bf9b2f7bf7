use axum::{
    extract::{Request, State},
    http::header::ORIGIN,
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::sync::Arc;

use crate::errors::AppError;

/// Middleware enforcing the origin allow-list.
///
/// Requests without an `Origin` header (curl, server-to-server) always pass.
/// Requests whose origin is not listed, preflights included, get a 403
/// `ORIGIN_NOT_ALLOWED` response instead of reaching the router.
pub async fn origin_guard(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !config.is_allowed(origin) {
            return AppError::OriginNotAllowed(origin.to_string()).into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Arc::new(CorsConfig::new(["http://localhost:5500"]));
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(config, origin_guard))
    }

    fn request(origin: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/ping");
        if let Some(origin) = origin {
            builder = builder.header(ORIGIN, origin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_request_without_origin_passes() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_allowed_origin_passes() {
        let response = app()
            .oneshot(request(Some("http://localhost:5500")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_origin_is_forbidden() {
        let response = app()
            .oneshot(request(Some("http://evil.example")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
