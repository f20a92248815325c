//! Structured logging configuration.
//!
//! This module provides functions for configuring structured logging
//! using `tracing-subscriber`.
//!
//! # Log Format
//!
//! When JSON formatting is enabled, log entries are output as JSON objects:
//!
//! ```json
//! {"timestamp":"2024-01-15T10:30:00.000Z","level":"INFO","target":"produce_server","fields":{"message":"batch add complete","accepted":2}}
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use produce_api::observability::{init_logging, LoggingConfig};
//!
//! // Production: JSON format with INFO level
//! init_logging(LoggingConfig::json());
//!
//! // Development: Text format with DEBUG level
//! init_logging(LoggingConfig::text().with_level(tracing::Level::DEBUG));
//! ```

use tracing::Level;
use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
};

/// Configuration for structured logging.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether to use JSON format (true) or text format (false)
    pub json_format: bool,
    /// The default log level if RUST_LOG is not set
    pub default_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            default_level: Level::INFO,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration for JSON output.
    pub fn json() -> Self {
        Self {
            json_format: true,
            ..Default::default()
        }
    }

    /// Create a new logging configuration for text output (development).
    pub fn text() -> Self {
        Self {
            json_format: false,
            ..Default::default()
        }
    }

    /// Set the default log level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }
}

/// Initialize the logging subsystem with the given configuration.
///
/// Call once at startup. The subscriber is global, so later calls have no
/// effect; the return value reports whether this call installed it.
pub fn init_logging(config: LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level.to_string()));

    if config.json_format {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        );
        tracing::subscriber::set_global_default(subscriber).is_ok()
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true));
        tracing::subscriber::set_global_default(subscriber).is_ok()
    }
}

/// Parse log level from string, falling back to INFO.
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
