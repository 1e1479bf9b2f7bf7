use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, origin_guard, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::io;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the generated OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server fails while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            shutdown_signal().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - The OpenAPI document at [`OPENAPI_PATH`]
/// - API routes nested under `/api`
/// - `root` routes (health, readiness) mounted at the top level
/// - Request tracing, security headers, CORS and the origin guard
/// - JSON 404 fallback
///
/// Layer order matters: the origin guard is outermost so disallowed origins
/// are refused before the CORS layer can answer their preflight. Every route
/// must be merged before the layers, since `Router::layer` only wraps the
/// routes that already exist.
///
/// # Errors
/// Returns `InvalidInput` if an allowed origin is not a valid header value.
pub fn create_router<T>(apis: Router, root: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = create_cors_layer(cors).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;

    info!(
        "CORS enabled for origins: {}",
        cors.allowed_origins.join(", ")
    );

    let router = Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(T::openapi()) }))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(middleware::from_fn_with_state(
            Arc::new(cors.clone()),
            origin_guard,
        ));

    Ok(router)
}
