//! produce-domain: Core inventory domain logic
//!
//! This crate contains the pure, synchronous part of the inventory service:
//! - The `Produce` record and its wire representation
//! - Field validation (code, name, unit price)
//! - Canonicalization of validated records
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               produce-domain                │
//! ├─────────────────────────────────────────────┤
//! │  model/      - Produce record & seed data   │
//! │  validation/ - Field rules & canonical form │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate holds state, so every function is safe to call
//! from any number of tasks at once.

pub mod model;
pub mod validation;

// Re-export commonly used types at the crate root
pub use model::{default_inventory, Produce};
pub use validation::{
    canonicalize_price, canonicalize_record, normalize_code, validate_code, validate_name,
    validate_price, validate_record, validation_messages, ValidationError, ValidationResult,
};
