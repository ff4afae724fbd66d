//! # CLI Server
//!
//! Server startup and management for the Quorum CLI.

use anyhow::anyhow;
use error::Result;
use migration::{Migrator, MigratorTrait as _};
use server::{create_app_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    commands::ServeArgs,
    config::{build_database_url, parse_socket_addr, DatabaseConfig},
};

/// Starts the API server
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Serve command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn serve(config: &DatabaseConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    let database_url = build_database_url(config);

    info!(target: "serve", "Connecting to database...");
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    // Run migrations automatically on startup
    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(target: "serve", "Database migrations completed successfully");

    let state = AppState {
        db,
    };
    let app = create_app_router(state);

    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server error: {}", e))?)
}

/// Completes when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target: "serve", "Received shutdown signal, stopping server...");
}
