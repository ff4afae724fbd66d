//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the
    /// given defaults.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format:      std::env::var("QUORUM_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
            log_file:    std::env::var("QUORUM_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("QUORUM_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));

        match self.format.as_str() {
            "pretty" => {
                Box::new(
                    Registry::default()
                        .with(filter)
                        .with(fmt::layer().pretty()),
                )
            },
            "compact" => {
                Box::new(
                    Registry::default()
                        .with(filter)
                        .with(fmt::layer().compact()),
                )
            },
            _ => {
                match self.rolling_writer() {
                    Some(writer) => {
                        Box::new(
                            Registry::default()
                                .with(filter)
                                .with(fmt::layer().json().with_writer(writer)),
                        )
                    },
                    None => Box::new(Registry::default().with(filter).with(fmt::layer().json())),
                }
            },
        }
    }

    /// Hourly rolling file appender when a log file is configured.
    fn rolling_writer(&self) -> Option<tracing_appender::rolling::RollingFileAppender> {
        let log_file = self.log_file.as_ref()?;
        let path = std::path::Path::new(log_file);
        let directory = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path.file_name()?.to_string_lossy().to_string();
        Some(tracing_appender::rolling::hourly(directory, file_name))
    }
}
