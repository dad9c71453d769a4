//! In-memory `IdentityStore` adapter.
//!
//! Keeps every recorded identity in insertion order. Nothing is ever removed;
//! recording the same name twice keeps both entries.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::Identity;
use crate::domain::ports::IdentityStore;

/// Append-only identity store held in process memory.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    records: Mutex<Vec<Identity>>,
}

impl InMemoryIdentityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded identities, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|identity| identity.name().to_owned())
            .collect()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn record(&self, identity: &Identity) {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(identity.clone());
        debug!(
            name = identity.name(),
            total = records.len(),
            "identity recorded"
        );
    }

    fn contains_name(&self, name: &str) -> bool {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|identity| identity.name() == name)
    }
}
