//! ProduceStore trait definition.

use async_trait::async_trait;
use produce_domain::Produce;

use crate::error::StorageError;

/// Result of applying one store operation to one record.
///
/// Outcomes are independent copies of stored state; mutating one never
/// affects the store. A success carries `count == 1` and no error; a failure
/// carries `count == 0` and the error that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The stored, removed or attempted record. Empty for absence errors.
    pub produce: Produce,
    /// `None` on success.
    pub error: Option<StorageError>,
    /// Number of records the operation succeeded on (0 or 1).
    pub count: u8,
}

impl Outcome {
    /// Creates a success outcome.
    pub fn success(produce: Produce) -> Self {
        Self {
            produce,
            error: None,
            count: 1,
        }
    }

    /// Creates a failure outcome.
    pub fn failure(produce: Produce, error: StorageError) -> Self {
        Self {
            produce,
            error: Some(error),
            count: 0,
        }
    }

    /// Creates the "not found" outcome carrying an empty record.
    pub fn not_found() -> Self {
        Self::failure(Produce::default(), StorageError::NotFound)
    }

    /// Returns true if the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.count == 1 && self.error.is_none()
    }

    /// Returns true if the operation failed because the key was absent.
    pub fn is_not_found(&self) -> bool {
        self.error.as_ref().is_some_and(StorageError::is_not_found)
    }
}

/// Abstract storage interface for produce records.
///
/// Implementations must be thread-safe (Send + Sync) and keep the
/// normalized produce code unique across live records. Every method is an
/// independent atomic operation that always yields an outcome; none of them
/// returns a process-level error.
#[async_trait]
pub trait ProduceStore: Send + Sync + 'static {
    /// Stores the record unless its normalized code is already taken.
    ///
    /// Success carries the stored form; a conflict carries the attempted
    /// record unchanged.
    async fn insert_if_absent(&self, produce: Produce) -> Outcome;

    /// Removes and returns the record under the normalized code.
    async fn remove_if_present(&self, code: &str) -> Outcome;

    /// Looks up the record under the normalized code.
    async fn get_by_key(&self, code: &str) -> Outcome;

    /// One success outcome per stored record, in no particular order.
    ///
    /// An empty table yields exactly one "not found" outcome.
    async fn get_all(&self) -> Vec<Outcome>;

    /// Number of live records.
    async fn len(&self) -> usize;

    /// Returns true if no records are stored.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
