//! Kivant Database Client Bootstrap - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;

use kivant_db::application::use_cases::CheckConnectionUseCase;
use kivant_db::application::ClientRegistry;
use kivant_db::infrastructure::driven_adapters::config::AppConfig;
use kivant_db::infrastructure::driven_adapters::{PostgresConnectionChecker, SqlxPoolFactory};
use kivant_db::infrastructure::driving_adapters::api_rest::{self, AppState};
use kivant_db::shared::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    telemetry::init_tracing(config.environment);
    tracing::info!(env = %config.environment, "Configuration loaded successfully");

    // Create the client registry and the client itself; a missing
    // DATABASE_URL stops the process here
    let registry = Arc::new(ClientRegistry::new(
        config.client_settings(),
        Arc::new(SqlxPoolFactory),
    ));
    let client = registry.client().await?;

    // Create use cases
    let check_connection_use_case = Arc::new(CheckConnectionUseCase::new(
        Arc::clone(&client),
        Arc::new(PostgresConnectionChecker),
    ));

    // Build router
    let app = api_rest::router(AppState {
        check_connection_use_case,
    });

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Teardown: production clients are owned here, not by the registry
    if !registry.runtime_env().retains_handles() {
        client.close().await;
    }
    registry.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
