//! Data types for batch operations.

use produce_domain::{validation_messages, Produce, ValidationError};
use produce_storage::Outcome;

/// Where in the pipeline a record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionStage {
    /// Failed field validation; never dispatched to the store.
    Validation,
    /// Dispatched, but the store operation failed.
    Store,
}

/// A submitted record that was not applied, with the reasons why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedProduce {
    /// The record as the caller submitted it.
    pub produce: Produce,
    /// Human-readable error messages (one per failing field, or one store error).
    pub errors: Vec<String>,
    /// The stage that rejected the record.
    pub stage: RejectionStage,
}

impl RejectedProduce {
    /// Creates a rejection for a record that failed validation.
    pub fn invalid(produce: Produce, errors: &[ValidationError]) -> Self {
        Self {
            produce,
            errors: validation_messages(errors),
            stage: RejectionStage::Validation,
        }
    }

    /// Creates a rejection for a record the store refused.
    pub fn store(produce: Produce, message: impl Into<String>) -> Self {
        Self {
            produce,
            errors: vec![message.into()],
            stage: RejectionStage::Store,
        }
    }

    /// Creates a store rejection from a failed outcome.
    pub fn from_outcome(outcome: Outcome) -> Self {
        let message = outcome
            .error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "store operation did not succeed".to_string());
        Self::store(outcome.produce, message)
    }
}

/// Classification of a batch result for the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Nothing was rejected.
    Complete,
    /// At least one record was dispatched and at least one was rejected.
    Partial,
    /// Every record failed validation; the store was never called.
    Invalid,
}

/// Response from a batch add operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchAddResponse {
    /// Records now in the store, in their canonical stored form.
    pub accepted: Vec<Produce>,
    /// Validation rejections first, then store rejections in completion order.
    pub rejected: Vec<RejectedProduce>,
    /// Number of records dispatched to the store.
    pub dispatched: usize,
}

impl BatchAddResponse {
    /// Total number of records accounted for.
    pub fn len(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Returns true if the batch contained no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classifies the batch result.
    pub fn status(&self) -> BatchStatus {
        if self.rejected.is_empty() {
            BatchStatus::Complete
        } else if self.dispatched == 0 {
            BatchStatus::Invalid
        } else {
            BatchStatus::Partial
        }
    }
}

/// Response from a full-table fetch.
///
/// An empty table yields empty `accepted` and `rejected` lists; that case is
/// not an error at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchAllResponse {
    /// Every stored record, in no particular order.
    pub accepted: Vec<Produce>,
    /// Failed outcomes other than the empty-table marker.
    pub rejected: Vec<RejectedProduce>,
}

impl FetchAllResponse {
    /// Returns true if nothing was fetched and nothing failed.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}
