//! # CLI Commands
//!
//! Command definitions and argument structures for the Quorum CLI.

use clap::{Args, Parser, Subcommand};

pub mod completions;
pub mod migrate;
pub mod validate;

/// Quorum - pull-request review management service
#[derive(Parser, Debug)]
#[command(name = "quorum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "QUORUM_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration and database connectivity
    Validate,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "APP_PORT", default_value = "8000")]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Run migrations in dry-run mode (no changes)
    #[arg(long)]
    pub dry_run: bool,

    /// Rollback the last migration
    #[arg(long)]
    pub rollback: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
