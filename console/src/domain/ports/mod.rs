//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod key_value_storage;
mod latency_sleeper;
mod login_service;
mod query_cache;
mod record_store;
mod session_store;
mod user_status_command;
mod users_query;

#[cfg(test)]
pub use key_value_storage::MockKeyValueStorage;
pub use key_value_storage::{KeyValueStorage, KeyValueStorageError, is_valid_storage_key};
#[cfg(test)]
pub use latency_sleeper::MockLatencySleeper;
pub use latency_sleeper::LatencySleeper;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use query_cache::MockQueryCache;
pub use query_cache::{CacheEntry, FixtureQueryCache, QueryCache, QueryCacheError, QueryResult};
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{FixtureRecordStore, RecordStore, RecordStoreError};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use user_status_command::MockUserStatusCommand;
pub use user_status_command::{StatusActionRequest, UpdateStatusRequest, UserStatusCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
