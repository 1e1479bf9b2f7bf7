use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{JsonFileTaskStore, TaskService};
use todo_api::{build_app, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(
        "Persisting tasks to {}",
        config.storage.data_file.display()
    );

    let store = JsonFileTaskStore::new(config.storage.data_file.clone());
    let service = TaskService::new(store);

    let app = build_app(service, config.app, &config.cors)?;

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
