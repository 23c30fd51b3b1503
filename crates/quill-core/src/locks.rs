//! Per-collection lock registry
//!
//! Each collection name maps to one mutex, created on first use and kept
//! for the lifetime of the registry. Creation goes through the map's entry
//! API, so concurrent first use of a name converges on a single lock.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

/// Lazily populated map from collection name to its lock
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for `collection`, creating it if this is the first use
    pub fn acquire(&self, collection: &str) -> Arc<Mutex<()>> {
        if let Some(lock) = self.locks.get(collection) {
            return Arc::clone(lock.value());
        }

        // The shard stays write-locked until the entry guard drops, so only
        // one caller inserts.
        Arc::clone(
            self.locks
                .entry(collection.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value(),
        )
    }

    /// Number of collections seen so far
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
