//! Port for the persisted user collection.
//!
//! The collection is read and written as a whole; there are no per-record
//! operations.

use async_trait::async_trait;

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordStoreError {
        /// The backing storage could not be read or written.
        Unavailable { message: String } => "record store unavailable: {message}",
        /// The stored collection could not be decoded or encoded.
        Corrupt { message: String } => "record store contents are invalid: {message}",
    }
}

/// Whole-collection persistence for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the stored collection; `None` when nothing has been written yet.
    async fn load(&self) -> Result<Option<Vec<UserRecord>>, RecordStoreError>;

    /// Overwrite the stored collection.
    async fn save(&self, records: &[UserRecord]) -> Result<(), RecordStoreError>;
}

/// Store that never holds anything and discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordStore;

#[async_trait]
impl RecordStore for FixtureRecordStore {
    async fn load(&self) -> Result<Option<Vec<UserRecord>>, RecordStoreError> {
        Ok(None)
    }

    async fn save(&self, _records: &[UserRecord]) -> Result<(), RecordStoreError> {
        Ok(())
    }
}
