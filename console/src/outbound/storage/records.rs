//! Record store persisted as one JSON array in key-value storage.
//!
//! A missing or blank entry reads as an empty store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::UserRecord;
use crate::domain::ports::{KeyValueStorage, KeyValueStorageError, RecordStore, RecordStoreError};

/// Entry holding the whole user collection.
pub const USERS_STORAGE_KEY: &str = "lendsqr-users";

/// [`RecordStore`] over a single key-value entry.
#[derive(Clone)]
pub struct KeyValueRecordStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl KeyValueRecordStore {
    /// Store the collection under [`USERS_STORAGE_KEY`] in `storage`.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

fn map_storage_error(error: KeyValueStorageError) -> RecordStoreError {
    RecordStoreError::unavailable(error.to_string())
}

#[async_trait]
impl RecordStore for KeyValueRecordStore {
    async fn load(&self) -> Result<Option<Vec<UserRecord>>, RecordStoreError> {
        let Some(raw) = self
            .storage
            .get(USERS_STORAGE_KEY)
            .await
            .map_err(map_storage_error)?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            debug!("stored user records are blank; treating as empty");
            return Ok(None);
        }
        let records: Vec<UserRecord> = serde_json::from_str(&raw)
            .map_err(|err| RecordStoreError::corrupt(err.to_string()))?;
        debug!(count = records.len(), "loaded stored user records");
        Ok(Some(records))
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), RecordStoreError> {
        let raw = serde_json::to_string(records)
            .map_err(|err| RecordStoreError::corrupt(err.to_string()))?;
        self.storage
            .set(USERS_STORAGE_KEY, &raw)
            .await
            .map_err(map_storage_error)?;
        debug!(count = records.len(), "stored user records");
        Ok(())
    }
}
