//! Read side of the console: cached list, detail and search queries.
//!
//! Every read goes through the query cache. A fresh entry is returned at
//! once; otherwise the simulated latency is awaited, the collection is read
//! and the result is cached under its key. Loads for the same key are
//! serialised so concurrent callers share one load.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use super::ports::{QueryCache, QueryResult, RecordStore, UsersQuery};
use super::records::RecordSource;
use super::runtime::QueryRuntime;
use super::search::search;
use super::{Error, QueryKey, SearchTerm, UserId, UserRecord, UsersPage, UsersQueryParams};

type LoadGates = HashMap<QueryKey, Arc<AsyncMutex<()>>>;

/// Query service implementing the [`UsersQuery`] driving port.
pub struct UsersQueryService<S, C> {
    source: RecordSource<S>,
    cache: Arc<C>,
    runtime: QueryRuntime,
    gates: Mutex<LoadGates>,
}

impl<S, C> UsersQueryService<S, C> {
    /// Serve reads from `source` through `cache` with `runtime`'s timings.
    pub fn new(source: RecordSource<S>, cache: Arc<C>, runtime: QueryRuntime) -> Self {
        Self {
            source,
            cache,
            runtime,
            gates: Mutex::new(HashMap::new()),
        }
    }
}

fn not_found(id: &UserId) -> Error {
    Error::not_found(format!("User with id {id} not found"))
}

fn mismatched(key: &QueryKey) -> Error {
    Error::internal(format!("query cache returned a mismatched entry for {key}"))
}

impl<S, C> UsersQueryService<S, C>
where
    S: RecordStore,
    C: QueryCache,
{
    /// Cached result for `key` if it is still fresh. Cache failures read as
    /// a miss.
    async fn fresh(&self, key: &QueryKey) -> Option<QueryResult> {
        match self.cache.get(key).await {
            Ok(entry) => {
                let now = self.runtime.clock.utc();
                entry
                    .filter(|entry| entry.is_fresh(now, self.runtime.stale_time))
                    .map(|entry| entry.result)
            }
            Err(error) => {
                warn!(%key, %error, "query cache read failed");
                None
            }
        }
    }

    fn gate(&self, key: &QueryKey) -> Result<Arc<AsyncMutex<()>>, Error> {
        let mut gates = self
            .gates
            .lock()
            .map_err(|_| Error::internal("query load gates poisoned"))?;
        Ok(Arc::clone(gates.entry(key.clone()).or_default()))
    }

    fn release_idle_gates(&self) {
        if let Ok(mut gates) = self.gates.lock() {
            gates.retain(|_, gate| Arc::strong_count(gate) > 1);
        }
    }

    async fn load<F>(&self, key: &QueryKey, compute: F) -> Result<QueryResult, Error>
    where
        F: FnOnce(Vec<UserRecord>) -> Result<QueryResult, Error> + Send,
    {
        debug!(%key, latency_ms = self.runtime.latency.as_millis(), "query cache miss");
        self.runtime.sleeper.sleep(self.runtime.latency).await;
        // Read before the store so an invalidation racing this load wins.
        let version = match self.cache.version(key).await {
            Ok(version) => Some(version),
            Err(error) => {
                warn!(%key, %error, "query cache version read failed");
                None
            }
        };
        let records = self.source.load().await?;
        let count = records.len();
        let result = compute(records)?;

        if let Some(version) = version {
            let fetched_at = self.runtime.clock.utc();
            match self.cache.put(key, result.clone(), fetched_at, version).await {
                Ok(true) => {}
                Ok(false) => debug!(%key, "query invalidated while loading; result not cached"),
                Err(error) => warn!(%key, %error, "query cache write failed"),
            }
        }
        info!(%key, records = count, "query loaded");
        Ok(result)
    }

    async fn cached<F>(&self, key: QueryKey, compute: F) -> Result<QueryResult, Error>
    where
        F: FnOnce(Vec<UserRecord>) -> Result<QueryResult, Error> + Send,
    {
        if let Some(result) = self.fresh(&key).await {
            debug!(%key, "query cache hit");
            return Ok(result);
        }

        let gate = self.gate(&key)?;
        let outcome = {
            let _guard = gate.lock().await;
            match self.fresh(&key).await {
                Some(result) => {
                    debug!(%key, "query loaded by a concurrent caller");
                    Ok(result)
                }
                None => self.load(&key, compute).await,
            }
        };
        drop(gate);
        self.release_idle_gates();
        outcome
    }
}

#[async_trait]
impl<S, C> UsersQuery for UsersQueryService<S, C>
where
    S: RecordStore,
    C: QueryCache,
{
    async fn list_users(&self, params: &UsersQueryParams) -> Result<UsersPage, Error> {
        let key = QueryKey::Users(params.clone());
        let request = params.clone();
        let result = self
            .cached(key.clone(), move |records| {
                Ok(QueryResult::Users(UsersPage::build(&records, &request)))
            })
            .await?;
        match result {
            QueryResult::Users(page) => Ok(page),
            QueryResult::User(_) | QueryResult::Search(_) => Err(mismatched(&key)),
        }
    }

    async fn user(&self, id: &UserId) -> Result<UserRecord, Error> {
        let key = QueryKey::User(id.clone());
        let wanted = id.clone();
        let result = self
            .cached(key.clone(), move |records| {
                records
                    .into_iter()
                    .find(|record| record.id == wanted)
                    .map(QueryResult::User)
                    .ok_or_else(|| not_found(&wanted))
            })
            .await?;
        match result {
            QueryResult::User(record) => Ok(record),
            QueryResult::Users(_) | QueryResult::Search(_) => Err(mismatched(&key)),
        }
    }

    async fn search_users(&self, term: &SearchTerm) -> Result<Vec<UserRecord>, Error> {
        let key = QueryKey::Search(term.clone());
        let needle = term.clone();
        let result = self
            .cached(key.clone(), move |records| {
                Ok(QueryResult::Search(search(&records, &needle)))
            })
            .await?;
        match result {
            QueryResult::Search(found) => Ok(found),
            QueryResult::Users(_) | QueryResult::User(_) => Err(mismatched(&key)),
        }
    }
}
