//! Record collection access shared by the query and mutation services.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{RecordStore, RecordStoreError};
use super::{Error, UserRecord};

/// The record store paired with the bundled default collection.
///
/// An empty store reads as the defaults. Reads never write the defaults
/// back; the first mutation persists the whole collection.
pub struct RecordSource<S> {
    store: Arc<S>,
    defaults: Arc<[UserRecord]>,
}

impl<S> Clone for RecordSource<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            defaults: Arc::clone(&self.defaults),
        }
    }
}

impl<S> RecordSource<S> {
    /// Pair `store` with the collection served while it is empty.
    pub fn new(store: Arc<S>, defaults: impl Into<Arc<[UserRecord]>>) -> Self {
        Self {
            store,
            defaults: defaults.into(),
        }
    }
}

impl<S: RecordStore> RecordSource<S> {
    fn map_store_error(error: RecordStoreError) -> Error {
        match error {
            RecordStoreError::Unavailable { message } => {
                Error::service_unavailable(format!("record store unavailable: {message}"))
            }
            RecordStoreError::Corrupt { message } => {
                Error::internal(format!("record store contents are invalid: {message}"))
            }
        }
    }

    /// The stored collection, or the defaults when nothing is stored.
    pub async fn load(&self) -> Result<Vec<UserRecord>, Error> {
        match self.store.load().await {
            Ok(Some(records)) => Ok(records),
            Ok(None) => {
                debug!(count = self.defaults.len(), "record store empty, using defaults");
                Ok(self.defaults.to_vec())
            }
            Err(error) => {
                warn!(%error, "record store read failed");
                Err(Self::map_store_error(error))
            }
        }
    }

    /// Overwrite the stored collection.
    pub async fn save(&self, records: &[UserRecord]) -> Result<(), Error> {
        self.store.save(records).await.map_err(|error| {
            warn!(%error, "record store write failed");
            Self::map_store_error(error)
        })
    }
}
