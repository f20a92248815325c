//! produce-storage: Storage abstraction layer
//!
//! This crate provides the record store for the inventory service, including:
//! - `ProduceStore` trait for store operations
//! - `Outcome`, the per-operation result handed back to callers
//! - In-memory implementation guarded by a single lock
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              produce-storage                │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs   - ProduceStore trait, Outcome  │
//! │  memory.rs   - In-memory implementation     │
//! │  error.rs    - Conflict / absence errors    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::StorageError;
pub use memory::MemoryProduceStore;
pub use traits::{Outcome, ProduceStore};
