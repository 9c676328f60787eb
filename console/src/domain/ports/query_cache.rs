//! Port for caching read results by query key.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{QueryKey, QueryKeyFilter, UserRecord, UsersPage};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the caching adapter.
    pub enum QueryCacheError {
        /// Cache backend is unavailable.
        Backend { message: String } => "query cache backend failure: {message}",
    }
}

/// Cached outcome of one read operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// One page of the list view.
    Users(UsersPage),
    /// One user's detail record.
    User(UserRecord),
    /// Header search matches.
    Search(Vec<UserRecord>),
}

/// A cached result plus the bookkeeping needed to judge its freshness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The cached outcome.
    pub result: QueryResult,
    /// When the outcome was read from the store.
    pub fetched_at: DateTime<Utc>,
    /// Set by invalidation; an invalidated entry is never fresh again.
    pub invalidated: bool,
}

impl CacheEntry {
    /// A fresh, valid entry fetched at `fetched_at`.
    pub fn new(result: QueryResult, fetched_at: DateTime<Utc>) -> Self {
        Self {
            result,
            fetched_at,
            invalidated: false,
        }
    }

    /// Whether the entry may be served without reloading.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    ///
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use users_console::domain::ports::{CacheEntry, QueryResult};
    ///
    /// let fetched = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    /// let entry = CacheEntry::new(QueryResult::Search(Vec::new()), fetched);
    /// let stale_time = Duration::from_secs(300);
    /// assert!(entry.is_fresh(fetched + TimeDelta::seconds(299), stale_time));
    /// assert!(!entry.is_fresh(fetched + TimeDelta::seconds(300), stale_time));
    /// ```
    pub fn is_fresh(&self, now: DateTime<Utc>, stale_time: Duration) -> bool {
        if self.invalidated {
            return false;
        }
        let stale_after = TimeDelta::from_std(stale_time).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(self.fetched_at) < stale_after
    }
}

/// Result cache keyed by [`QueryKey`].
///
/// Every key carries a version that invalidation bumps, whether or not an
/// entry is stored yet. A load reads the version before touching the store
/// and hands it back to [`QueryCache::put`], which drops the result when an
/// invalidation happened in between.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryCache: Send + Sync {
    /// Read the entry for `key`, fresh or not.
    async fn get(&self, key: &QueryKey) -> Result<Option<CacheEntry>, QueryCacheError>;

    /// Current version of `key`. Starts tracking the key when it is unknown so
    /// later invalidations are observed.
    async fn version(&self, key: &QueryKey) -> Result<u64, QueryCacheError>;

    /// Store `result` for `key`, replacing any previous entry, unless the key
    /// has been invalidated since `version` was read. Returns whether the
    /// result was stored.
    async fn put(
        &self,
        key: &QueryKey,
        result: QueryResult,
        fetched_at: DateTime<Utc>,
        version: u64,
    ) -> Result<bool, QueryCacheError>;

    /// Mark every entry matching `filter` as stale, bump the version of every
    /// matching key and return how many entries were marked.
    async fn invalidate(&self, filter: &QueryKeyFilter) -> Result<usize, QueryCacheError>;
}

/// Cache that never stores anything, so every read reloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQueryCache;

#[async_trait]
impl QueryCache for FixtureQueryCache {
    async fn get(&self, _key: &QueryKey) -> Result<Option<CacheEntry>, QueryCacheError> {
        Ok(None)
    }

    async fn version(&self, _key: &QueryKey) -> Result<u64, QueryCacheError> {
        Ok(0)
    }

    async fn put(
        &self,
        _key: &QueryKey,
        _result: QueryResult,
        _fetched_at: DateTime<Utc>,
        _version: u64,
    ) -> Result<bool, QueryCacheError> {
        Ok(false)
    }

    async fn invalidate(&self, _filter: &QueryKeyFilter) -> Result<usize, QueryCacheError> {
        Ok(0)
    }
}
