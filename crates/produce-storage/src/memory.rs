//! In-memory storage implementation.
//!
//! A single `Mutex<HashMap>` keyed by the upper-cased produce code. Every
//! operation takes the lock exactly once, finishes its table access, and
//! drops the guard before returning, so no guard is ever held across an
//! `.await` and no operation re-enters the lock.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use produce_domain::{default_inventory, normalize_code, Produce};
use tracing::{debug, instrument};

use crate::error::StorageError;
use crate::traits::{Outcome, ProduceStore};

/// In-memory implementation of ProduceStore.
///
/// # Performance Characteristics
///
/// - **Insert / remove / get**: O(1) average (HashMap)
/// - **Get all**: O(N) clone of the table under the lock
///
/// Contention is resolved by blocking on the single lock; there is no
/// reader/writer split and no optimistic path.
#[derive(Debug, Default)]
pub struct MemoryProduceStore {
    rows: Mutex<HashMap<String, Produce>>,
}

impl MemoryProduceStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty in-memory store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Creates a store pre-populated with `records`.
    ///
    /// Records are stored under their normalized code; when two records
    /// normalize to the same code the first one wins.
    pub fn with_records(records: impl IntoIterator<Item = Produce>) -> Self {
        let mut rows = HashMap::new();
        for mut produce in records {
            let key = normalize_code(&produce.code);
            if let Entry::Vacant(entry) = rows.entry(key) {
                produce.code = entry.key().clone();
                entry.insert(produce);
            }
        }
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Creates a store holding the default inventory.
    pub fn seeded() -> Self {
        Self::with_records(default_inventory())
    }

    // Each critical section is one map operation; poisoning is ignored.
    fn table(&self) -> MutexGuard<'_, HashMap<String, Produce>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProduceStore for MemoryProduceStore {
    #[instrument(skip(self, produce), fields(code = %produce.code))]
    async fn insert_if_absent(&self, produce: Produce) -> Outcome {
        let key = normalize_code(&produce.code);
        let mut rows = self.table();

        match rows.entry(key) {
            Entry::Occupied(entry) => {
                debug!(key = %entry.key(), "produce code already exists");
                let code = entry.key().clone();
                Outcome::failure(produce, StorageError::AlreadyExists { code })
            }
            Entry::Vacant(entry) => {
                let stored = Produce {
                    code: entry.key().clone(),
                    ..produce
                };
                entry.insert(stored.clone());
                Outcome::success(stored)
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove_if_present(&self, code: &str) -> Outcome {
        let key = normalize_code(code);
        match self.table().remove(&key) {
            Some(removed) => Outcome::success(removed),
            None => Outcome::not_found(),
        }
    }

    #[instrument(skip(self))]
    async fn get_by_key(&self, code: &str) -> Outcome {
        let key = normalize_code(code);
        match self.table().get(&key) {
            Some(produce) => Outcome::success(produce.clone()),
            None => Outcome::not_found(),
        }
    }

    async fn get_all(&self) -> Vec<Outcome> {
        let rows = self.table();
        if rows.is_empty() {
            return vec![Outcome::not_found()];
        }
        rows.values().cloned().map(Outcome::success).collect()
    }

    async fn len(&self) -> usize {
        self.table().len()
    }
}
