//! Application state for HTTP handlers.

use std::sync::Arc;

use produce_server::ProduceHandler;
use produce_storage::ProduceStore;

/// Application state shared across all HTTP handlers.
///
/// # Type Parameters
///
/// * `S` - The storage backend implementing `ProduceStore`
pub struct AppState<S: ProduceStore> {
    /// The coordinator every route delegates to.
    pub handler: ProduceHandler<S>,
}

impl<S: ProduceStore> AppState<S> {
    /// Creates a new application state over the given store.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            handler: ProduceHandler::new(storage),
        }
    }
}

impl<S: ProduceStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}
