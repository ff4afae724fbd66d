//! # Quorum CLI
//!
//! Command-line interface for the Quorum pull-request review service.
//!
//! ## Usage
//!
//! ```bash
//! quorum serve     # Start the API server (runs migrations automatically)
//! quorum migrate   # Run database migrations
//! quorum validate  # Verify configuration and database connectivity
//! quorum --help    # Show help
//! ```

use clap::{CommandFactory as _, Parser as _};
use error::{AppError, Result};

mod commands;
mod config;
mod server;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {}", e)))?;

    match cli.command {
        Commands::Serve(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
            server::serve(&db_config, &args).await
        },
        Commands::Migrate(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
            commands::migrate::migrate(&db_config, args).await
        },
        Commands::Validate => commands::validate::validate().await,
        Commands::Completions(args) => {
            commands::completions::completions(&mut Cli::command(), &args);
            Ok(())
        },
    }
}
