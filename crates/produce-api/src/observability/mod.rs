//! Observability infrastructure.
//!
//! This module provides structured logging configuration.

mod logging;

pub use logging::{init_logging, parse_log_level, LoggingConfig};
