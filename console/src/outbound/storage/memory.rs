//! Process-local key-value storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{KeyValueStorage, KeyValueStorageError, is_valid_storage_key};

/// Entries held in a mutex-guarded map; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(
        &self,
        key: &str,
    ) -> Result<MutexGuard<'_, HashMap<String, String>>, KeyValueStorageError> {
        if !is_valid_storage_key(key) {
            return Err(KeyValueStorageError::invalid_key(key));
        }
        self.entries
            .lock()
            .map_err(|_| KeyValueStorageError::io(key, "storage mutex poisoned"))
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        Ok(self.entries(key)?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
        self.entries(key)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
        self.entries(key)?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_and_remove() {
        let storage = InMemoryKeyValueStorage::new();
        assert_eq!(storage.get("lendsqr-users").await.expect("get"), None);

        storage.set("lendsqr-users", "[]").await.expect("set");
        assert_eq!(
            storage.get("lendsqr-users").await.expect("get").as_deref(),
            Some("[]")
        );

        storage.remove("lendsqr-users").await.expect("remove");
        storage.remove("lendsqr-users").await.expect("second remove is a no-op");
        assert_eq!(storage.get("lendsqr-users").await.expect("get"), None);
    }

    #[tokio::test]
    async fn rejects_keys_other_adapters_cannot_store() {
        let storage = InMemoryKeyValueStorage::new();
        let err = storage.set("../users", "[]").await.expect_err("invalid key");
        assert_eq!(err, KeyValueStorageError::invalid_key("../users"));
    }
}
