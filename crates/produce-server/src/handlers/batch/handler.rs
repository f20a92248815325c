//! Produce handler implementation.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use produce_domain::{canonicalize_record, validate_record, Produce};
use produce_storage::{Outcome, ProduceStore};
use tracing::{debug, error, info, instrument};

use super::types::{BatchAddResponse, FetchAllResponse, RejectedProduce};

/// Handler for produce operations.
///
/// Owns a handle to the store; multiple handlers may share one store and
/// every method is safe to call concurrently.
pub struct ProduceHandler<S>
where
    S: ProduceStore,
{
    /// The record store.
    store: Arc<S>,
}

impl<S> Clone for ProduceHandler<S>
where
    S: ProduceStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ProduceHandler<S>
where
    S: ProduceStore,
{
    /// Creates a new produce handler.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Splits candidates into valid records and validation rejections.
    ///
    /// Input order is preserved within each list.
    pub fn partition(records: Vec<Produce>) -> (Vec<Produce>, Vec<RejectedProduce>) {
        let mut valid = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();

        for produce in records {
            match validate_record(&produce) {
                Ok(()) => valid.push(produce),
                Err(errors) => {
                    debug!(produce = %produce, error_count = errors.len(), "produce failed validation");
                    rejected.push(RejectedProduce::invalid(produce, &errors));
                }
            }
        }

        (valid, rejected)
    }

    /// Validates and inserts a batch of records.
    ///
    /// Each valid record is canonicalized and inserted by its own spawned
    /// task. Outcomes are collected in completion order, so the order of
    /// `accepted` and of store rejections is unspecified. Every input
    /// appears exactly once in the response.
    ///
    /// Dispatched tasks always run to completion; dropping the returned
    /// future does not cancel them.
    #[instrument(skip_all, fields(batch_size = records.len()))]
    pub async fn batch_add(&self, records: Vec<Produce>) -> BatchAddResponse {
        let (valid, mut rejected) = Self::partition(records);
        let dispatched = valid.len();

        let mut in_flight: FuturesUnordered<_> = valid
            .into_iter()
            .map(|submitted| {
                let store = Arc::clone(&self.store);
                let candidate = canonicalize_record(submitted.clone());
                let handle =
                    tokio::spawn(async move { store.insert_if_absent(candidate).await });
                async move { (submitted, handle.await) }
            })
            .collect();

        let mut accepted = Vec::with_capacity(dispatched);
        while let Some((submitted, joined)) = in_flight.next().await {
            match joined {
                Ok(outcome) if outcome.is_success() => accepted.push(outcome.produce),
                Ok(outcome) => {
                    debug!(code = %submitted.code, error = ?outcome.error, "insert rejected");
                    rejected.push(RejectedProduce::from_outcome(Outcome {
                        produce: submitted,
                        ..outcome
                    }));
                }
                Err(join_error) => {
                    error!(code = %submitted.code, error = %join_error, "insert task failed");
                    rejected.push(RejectedProduce::store(
                        submitted,
                        format!("insert task failed: {join_error}"),
                    ));
                }
            }
        }

        info!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            dispatched,
            "batch add complete"
        );

        BatchAddResponse {
            accepted,
            rejected,
            dispatched,
        }
    }

    /// Fetches a single record by code.
    pub async fn fetch_one(&self, code: &str) -> Outcome {
        self.store.get_by_key(code).await
    }

    /// Deletes a single record by code.
    pub async fn delete_one(&self, code: &str) -> Outcome {
        let outcome = self.store.remove_if_present(code).await;
        if outcome.is_success() {
            info!(code = %outcome.produce.code, "produce deleted");
        }
        outcome
    }

    /// Fetches every stored record.
    ///
    /// The store's empty-table marker is dropped, so an empty table yields
    /// an empty response rather than a rejection.
    pub async fn fetch_all(&self) -> FetchAllResponse {
        let mut response = FetchAllResponse::default();

        for outcome in self.store.get_all().await {
            if outcome.is_success() {
                response.accepted.push(outcome.produce);
            } else if outcome.is_not_found() && outcome.produce.is_empty() {
                continue;
            } else {
                response.rejected.push(RejectedProduce::from_outcome(outcome));
            }
        }

        debug!(count = response.accepted.len(), "fetched all produce");
        response
    }
}
