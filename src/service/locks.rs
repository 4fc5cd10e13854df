use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

/// Entries whose mutex nobody holds are swept once the map reaches this
/// size, so finished matches do not accumulate forever.
const PRUNE_THRESHOLD: usize = 64;

/// Per-match mutual exclusion for ledger mutations.
///
/// Concurrent record/undo calls against one match must not interleave
/// their read-modify-write of the goal counters; operations on different
/// matches stay independent. Reads take no lock.
#[derive(Default)]
pub struct MatchLocks {
    inner: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl MatchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_match(&self, match_id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut map = self.inner.lock().expect("match lock map poisoned");
        if map.len() >= PRUNE_THRESHOLD {
            map.retain(|_, lock| Arc::strong_count(lock) > 1);
        }
        map.entry(match_id).or_default().clone()
    }

    #[cfg(test)]
    pub(crate) fn entry_count(&self) -> usize {
        self.inner.lock().expect("match lock map poisoned").len()
    }
}
