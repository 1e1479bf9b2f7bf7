use tokio::signal;
use tracing::{info, warn};

/// Resolves on SIGINT or SIGTERM, returning the signal's name.
///
/// Handed to `axum::serve().with_graceful_shutdown()`, so a task document
/// write that is already in flight completes before the process exits.
/// If a handler cannot be installed that source is ignored and the other
/// one still stops the server.
pub async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Cannot listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let name = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    info!(signal = name, "Shutting down, draining in-flight requests");
    name
}
