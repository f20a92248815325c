//! produce-server: Request handlers and business logic
//!
//! This crate contains the coordination layer including:
//! - Batch add with per-record concurrent dispatch
//! - Single-key fetch and delete pass-through
//! - Full-table fetch partitioning
//! - Configuration management
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               produce-server                │
//! ├─────────────────────────────────────────────┤
//! │  config.rs   - Configuration management     │
//! │  handlers/   - Request handlers             │
//! │    batch/         - Batch coordinator       │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod handlers;

// Re-exports for convenience
pub use config::{ConfigLoadError, ServerConfig};
pub use handlers::batch::ProduceHandler;
