//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
///
/// Malformed records never reach the store, so these only cover key
/// conflicts, absent keys and internal failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A live record already occupies the normalized code.
    #[error("produce code {code} already exists")]
    AlreadyExists { code: String },

    /// No record under the requested code, or the table is empty.
    #[error("produce not found")]
    NotFound,

    /// Internal error.
    #[error("internal storage error: {message}")]
    Internal { message: String },
}

impl StorageError {
    /// Returns true for the absence error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound)
    }
}
