//! produce-api: HTTP API layer
//!
//! This crate provides the network boundary of the inventory service:
//! - HTTP REST endpoints via Axum
//! - Mapping of batch classifications to status codes
//! - Structured logging setup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                produce-api                  │
//! ├─────────────────────────────────────────────┤
//! │  http/          - HTTP REST endpoints       │
//! │  observability/ - Logging configuration     │
//! └─────────────────────────────────────────────┘
//! ```

pub mod http;
pub mod observability;
