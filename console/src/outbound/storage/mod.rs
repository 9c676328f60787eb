//! Key-value storage adapters and the stores built on top of them.

mod file;
mod memory;
mod records;
mod session;

pub use file::{FileKeyValueStorage, StorageDirError};
pub use memory::InMemoryKeyValueStorage;
pub use records::{KeyValueRecordStore, USERS_STORAGE_KEY};
pub use session::{AUTHENTICATED_USER_STORAGE_KEY, KeyValueSessionStore};
