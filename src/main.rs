//! vehicle-telemetry server entry point.
//!
//! Connects to PostgreSQL, makes sure the `telemetry` table exists, then
//! serves the REST API until SIGINT or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use vehicle_telemetry::api;
use vehicle_telemetry::app_state::AppState;
use vehicle_telemetry::config::{LogFormat, TelemetryConfig};
use vehicle_telemetry::persistence::{PostgresStore, TelemetryStore};
use vehicle_telemetry::service::TelemetryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = TelemetryConfig::from_env()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("invalid configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting vehicle-telemetry");

    // Build persistence layer; any failure here is fatal
    let store = Arc::new(
        PostgresStore::connect(&config)
            .await
            .context("failed to connect to database")?,
    );
    store
        .ensure_schema()
        .await
        .context("failed to create telemetry table")?;
    tracing::info!(
        max_connections = config.database_max_connections,
        "database ready"
    );

    // Build service layer and application state
    let service = TelemetryService::new(
        Arc::clone(&store) as Arc<dyn TelemetryStore>,
        config.insert_timeout(),
    );
    let app = api::build_app(AppState::new(service), config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
