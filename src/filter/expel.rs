/*!
 * Expulsion List
 *
 * Shared append-only collection of names. Workers build their batch
 * privately and take the lock once to merge it, so contention is one
 * critical section per worker rather than one per match.
 *
 * Order across batches follows merge order, which depends on thread
 * scheduling. Names inside one batch keep roster order.
 */

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ExpulsionList {
    names: Mutex<Vec<String>>,
    merges: AtomicUsize,
}

impl ExpulsionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a whole worker batch under one lock
    pub fn merge(&self, batch: Vec<String>) {
        let added = batch.len();
        let total = {
            let mut names = self.names.lock();
            names.extend(batch);
            names.len()
        };
        self.merges.fetch_add(1, Ordering::Relaxed);
        debug!(added, total, "merged worker batch");
    }

    pub fn len(&self) -> usize {
        self.names.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.lock().is_empty()
    }

    /// Number of batches merged so far
    pub fn merge_count(&self) -> usize {
        self.merges.load(Ordering::Relaxed)
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Vec<String> {
        self.names.lock().clone()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names.into_inner()
    }
}
