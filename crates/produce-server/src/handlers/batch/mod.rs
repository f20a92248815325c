//! Batch coordinator for produce operations.
//!
//! Applies validation and then a store operation to a collection of
//! candidate records:
//!
//! 1. **Partition**: Each record is validated; invalid ones are rejected
//!    without touching the store
//! 2. **Fan-out**: Every valid record is canonicalized and inserted by its
//!    own spawned task
//! 3. **Fan-in**: Exactly one outcome per dispatched task is collected, in
//!    completion order, and re-partitioned into accepted and rejected
//!
//! Every submitted record ends up in exactly one of the two lists.
//!
//! Single-key fetch and delete are direct pass-throughs to the store.

mod handler;
mod types;

pub use handler::ProduceHandler;
pub use types::{BatchAddResponse, BatchStatus, FetchAllResponse, RejectedProduce, RejectionStage};

#[cfg(test)]
mod batch_proptest;
