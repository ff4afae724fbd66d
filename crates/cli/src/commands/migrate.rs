//! # CLI Migration Command
//!
//! Database migration handling for the Quorum CLI.

use anyhow::anyhow;
use error::Result;
use migration::MigratorTrait as _;
use tracing::info;

use crate::{
    commands::MigrateArgs,
    config::{build_database_url, DatabaseConfig},
};

/// Runs database migrations
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Migrate command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn migrate(config: &DatabaseConfig, args: MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        rollback = %args.rollback,
        "Running database migrations..."
    );

    let database_url = build_database_url(config);

    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    if args.dry_run {
        let pending = migration::Migrator::get_pending_migrations(&db)
            .await
            .map_err(|e| anyhow!("Failed to get pending migrations: {}", e))?;

        info!(
            target: "migrate",
            pending_count = %pending.len(),
            "Dry run mode - pending migrations found"
        );

        for m in &pending {
            info!(target: "migrate", migration = %m.name(), "Would apply");
        }

        return Ok(());
    }

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");

        migration::Migrator::down(&db, None)
            .await
            .map_err(|e| anyhow!("Failed to rollback migration: {}", e))?;

        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;

    info!(target: "migrate", "Migrations completed successfully");

    Ok(())
}
