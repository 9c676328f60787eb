//! Composition root wiring storage, cache, runtime and services.
//!
//! Callers depend on [`ConsoleState`] and its driving ports only, so the
//! adapters behind them can be swapped for tests.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::ConsoleSettings;
use crate::domain::ports::{KeyValueStorage, LoginService, UserStatusCommand, UsersQuery};
use crate::domain::{
    DemoLoginService, QueryRuntime, RecordSource, UserRecord, UserStatusService,
    UsersQueryService,
};
use crate::inbound::{SearchInput, SearchInputHandle, search_input};
use crate::outbound::cache::InMemoryQueryCache;
use crate::outbound::storage::{
    FileKeyValueStorage, InMemoryKeyValueStorage, KeyValueRecordStore, KeyValueSessionStore,
    StorageDirError,
};

/// Dependency bundle for the console.
#[derive(Clone)]
pub struct ConsoleState {
    /// Cached list, detail and search reads.
    pub users: Arc<dyn UsersQuery>,
    /// Status changes and row actions.
    pub user_status: Arc<dyn UserStatusCommand>,
    /// Demo login session.
    pub login: Arc<dyn LoginService>,
    /// Shared query cache, exposed for inspection.
    pub cache: Arc<InMemoryQueryCache>,
    /// Quiet period applied to header search input.
    pub debounce: Duration,
}

impl ConsoleState {
    /// Build the console from settings and the bundled default dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageDirError`] when the configured storage directory
    /// cannot be created or opened.
    pub fn build(
        settings: &ConsoleSettings,
        defaults: impl Into<Arc<[UserRecord]>>,
    ) -> Result<Self, StorageDirError> {
        let runtime = QueryRuntime::with_timings(settings.latency(), settings.stale_time());
        Self::build_with_runtime(settings, defaults, runtime)
    }

    /// Build the console with an explicit clock, sleeper and timings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageDirError`] when the configured storage directory
    /// cannot be created or opened.
    pub fn build_with_runtime(
        settings: &ConsoleSettings,
        defaults: impl Into<Arc<[UserRecord]>>,
        runtime: QueryRuntime,
    ) -> Result<Self, StorageDirError> {
        let storage: Arc<dyn KeyValueStorage> = match settings.storage_dir() {
            Some(dir) => {
                info!(dir = %dir.display(), "using file-backed storage");
                Arc::new(FileKeyValueStorage::open(dir)?)
            }
            None => {
                info!("using in-memory storage");
                Arc::new(InMemoryKeyValueStorage::new())
            }
        };
        Ok(Self::from_storage(
            storage,
            defaults,
            runtime,
            settings.debounce(),
        ))
    }

    /// Wire the services over an existing key-value storage.
    pub fn from_storage(
        storage: Arc<dyn KeyValueStorage>,
        defaults: impl Into<Arc<[UserRecord]>>,
        runtime: QueryRuntime,
        debounce: Duration,
    ) -> Self {
        let records = Arc::new(KeyValueRecordStore::new(Arc::clone(&storage)));
        let source = RecordSource::new(records, defaults);
        let cache = Arc::new(InMemoryQueryCache::new());
        let sessions = Arc::new(KeyValueSessionStore::new(storage));

        let users = UsersQueryService::new(source.clone(), Arc::clone(&cache), runtime.clone());
        let user_status = UserStatusService::new(source, Arc::clone(&cache), runtime);

        Self {
            users: Arc::new(users),
            user_status: Arc::new(user_status),
            login: Arc::new(DemoLoginService::new(sessions)),
            cache,
            debounce,
        }
    }

    /// A fresh header search box using the configured debounce window.
    pub fn search_input(&self) -> (SearchInputHandle, SearchInput) {
        search_input(self.debounce)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::ports::{KeyValueStorageError, UpdateStatusRequest};
    use crate::domain::{LoginCredentials, UserId, UserStatus, UsersQueryParams};
    use crate::outbound::storage::USERS_STORAGE_KEY;
    use crate::test_support::{ImmediateSleeper, reference_users};

    /// Storage whose first read of the user collection holds its value until
    /// released, so a write can land between the read and its caching.
    #[derive(Default)]
    struct HeldFirstRead {
        inner: InMemoryKeyValueStorage,
        held: AtomicBool,
        reading: Notify,
        release: Notify,
    }

    #[async_trait]
    impl KeyValueStorage for HeldFirstRead {
        async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
            let value = self.inner.get(key).await?;
            if key == USERS_STORAGE_KEY && !self.held.swap(true, Ordering::SeqCst) {
                self.reading.notify_one();
                self.release.notified().await;
            }
            Ok(value)
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
            self.inner.remove(key).await
        }
    }

    fn immediate_runtime() -> QueryRuntime {
        QueryRuntime {
            sleeper: Arc::new(ImmediateSleeper),
            ..QueryRuntime::default()
        }
    }

    #[fixture]
    fn in_memory() -> ConsoleState {
        ConsoleState::build_with_runtime(
            &ConsoleSettings::default(),
            reference_users(),
            immediate_runtime(),
        )
        .expect("in-memory state builds")
    }

    #[rstest]
    #[tokio::test]
    async fn serves_defaults_from_empty_storage(in_memory: ConsoleState) {
        let page = in_memory
            .users
            .list_users(&UsersQueryParams::default())
            .await
            .expect("list loads");
        assert_eq!(page.filtered_count(), 3);
        assert_eq!(page.organizations, vec!["Irorun", "Lendsqr"]);
        assert_eq!(in_memory.cache.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn demo_login_round_trip(in_memory: ConsoleState) {
        let credentials =
            LoginCredentials::try_from_parts("test@lendsqr.com", "Test1234!").expect("valid");
        in_memory.login.login(&credentials).await.expect("login");
        assert!(in_memory.login.is_authenticated().await.expect("session"));

        in_memory.login.logout().await.expect("logout");
        assert!(!in_memory.login.is_authenticated().await.expect("session"));
    }

    #[rstest]
    fn search_input_uses_configured_debounce(in_memory: ConsoleState) {
        assert_eq!(in_memory.debounce, Duration::from_millis(300));
        let (_handle, _input) = in_memory.search_input();
    }

    #[tokio::test]
    async fn blank_stored_collection_serves_defaults() {
        let storage = Arc::new(InMemoryKeyValueStorage::new());
        storage.set(USERS_STORAGE_KEY, "").await.expect("set");
        let state = ConsoleState::from_storage(
            storage,
            reference_users(),
            immediate_runtime(),
            Duration::from_millis(300),
        );

        let page = state
            .users
            .list_users(&UsersQueryParams::default())
            .await
            .expect("list loads");
        assert_eq!(page.filtered_count(), 3);
    }

    #[tokio::test]
    async fn file_storage_persists_mutations_across_states() {
        let dir = TempDir::new().expect("temp dir");
        let settings = ConsoleSettings {
            storage_dir: Some(dir.path().join("store")),
            ..ConsoleSettings::default()
        };
        let id = UserId::new("3").expect("valid id");

        let first =
            ConsoleState::build_with_runtime(&settings, reference_users(), immediate_runtime())
                .expect("file state builds");
        first
            .user_status
            .update_status(&UpdateStatusRequest {
                user_id: id.clone(),
                status: UserStatus::Active,
                pagination: None,
            })
            .await
            .expect("update succeeds");

        let second = ConsoleState::build_with_runtime(
            &settings,
            Vec::<UserRecord>::new(),
            immediate_runtime(),
        )
        .expect("file state reopens");
        let record = second.users.user(&id).await.expect("record persisted");
        assert_eq!(record.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn status_change_during_an_in_flight_read_is_seen_by_the_next_read() {
        let storage = Arc::new(HeldFirstRead::default());
        let state = ConsoleState::from_storage(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            reference_users(),
            immediate_runtime(),
            Duration::from_millis(300),
        );
        let id = UserId::new("2").expect("valid id");

        let users = Arc::clone(&state.users);
        let read_id = id.clone();
        let in_flight = tokio::spawn(async move { users.user(&read_id).await });
        storage.reading.notified().await;

        let updated = state
            .user_status
            .update_status(&UpdateStatusRequest {
                user_id: id.clone(),
                status: UserStatus::Active,
                pagination: None,
            })
            .await
            .expect("update succeeds");
        assert_eq!(updated.status, UserStatus::Active);

        storage.release.notify_one();
        let stale = in_flight
            .await
            .expect("read task joins")
            .expect("in-flight read succeeds");
        assert_eq!(stale.status, UserStatus::Pending);

        let after = state.users.user(&id).await.expect("detail loads");
        assert_eq!(after.status, UserStatus::Active);
    }
}
