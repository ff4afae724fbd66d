//! # CLI Validate Command
//!
//! Checks environment configuration and database connectivity.

use anyhow::anyhow;
use error::{AppError, Result};
use tracing::info;

use crate::config::{build_database_url, DatabaseConfig};

/// Verifies configuration and pings the database.
pub async fn validate() -> Result<()> {
    let config = DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
    info!(
        target: "validate",
        host = %config.host,
        port = %config.port,
        database = %config.database,
        "Database configuration loaded"
    );

    let database_url = build_database_url(&config);
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    db.ping()
        .await
        .map_err(|e| anyhow!("Database ping failed: {}", e))?;

    info!(target: "validate", "Configuration is valid and the database is reachable");

    Ok(())
}
