//! In-memory query cache adapter.
//!
//! Entries live for the lifetime of the process; staleness is judged by the
//! services from each entry's fetch time, so nothing here expires on its own.
//! Keys stay tracked after their first version read so invalidation can bump
//! them before any entry exists.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::ports::{CacheEntry, QueryCache, QueryCacheError, QueryResult};
use crate::domain::{QueryKey, QueryKeyFilter};

#[derive(Debug, Default)]
struct Slot {
    entry: Option<CacheEntry>,
    version: u64,
}

type Slots = HashMap<QueryKey, Slot>;

/// Mutex-guarded map from query key to cached entry and version.
#[derive(Debug, Default)]
pub struct InMemoryQueryCache {
    slots: Mutex<Slots>,
}

impl InMemoryQueryCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, fresh or not.
    pub fn len(&self) -> usize {
        self.slots().map_or(0, |slots| {
            slots.values().filter(|slot| slot.entry.is_some()).count()
        })
    }

    /// Whether no entry is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slots(&self) -> Result<MutexGuard<'_, Slots>, QueryCacheError> {
        self.slots
            .lock()
            .map_err(|_| QueryCacheError::backend("cache mutex poisoned"))
    }
}

#[async_trait]
impl QueryCache for InMemoryQueryCache {
    async fn get(&self, key: &QueryKey) -> Result<Option<CacheEntry>, QueryCacheError> {
        Ok(self.slots()?.get(key).and_then(|slot| slot.entry.clone()))
    }

    async fn version(&self, key: &QueryKey) -> Result<u64, QueryCacheError> {
        Ok(self.slots()?.entry(key.clone()).or_default().version)
    }

    async fn put(
        &self,
        key: &QueryKey,
        result: QueryResult,
        fetched_at: DateTime<Utc>,
        version: u64,
    ) -> Result<bool, QueryCacheError> {
        let mut slots = self.slots()?;
        let slot = slots.entry(key.clone()).or_default();
        if slot.version != version {
            debug!(
                %key,
                observed = version,
                current = slot.version,
                "discarding superseded result"
            );
            return Ok(false);
        }
        slot.entry = Some(CacheEntry::new(result, fetched_at));
        Ok(true)
    }

    async fn invalidate(&self, filter: &QueryKeyFilter) -> Result<usize, QueryCacheError> {
        let mut slots = self.slots()?;
        let mut marked = 0;
        for (key, slot) in slots.iter_mut() {
            if !filter.matches(key) {
                continue;
            }
            slot.version = slot.version.wrapping_add(1);
            if let Some(entry) = slot.entry.as_mut() {
                entry.invalidated = true;
                marked += 1;
            }
        }
        Ok(marked)
    }
}
