//! Driving port for the read side of the console.
//!
//! Inbound adapters call this port to render the users table, the detail
//! page and the header search without knowing how records are stored or
//! cached.

use async_trait::async_trait;

use crate::domain::{Error, SearchTerm, UserId, UserRecord, UsersPage, UsersQueryParams};

/// Domain use-case port for reading user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// One filtered page of the users table.
    async fn list_users(&self, params: &UsersQueryParams) -> Result<UsersPage, Error>;

    /// A single record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no record has this id.
    async fn user(&self, id: &UserId) -> Result<UserRecord, Error>;

    /// Top matches for a header search.
    ///
    /// Callers only get here with a non-blank term; [`SearchTerm::parse`]
    /// returning `None` means search is disabled.
    async fn search_users(&self, term: &SearchTerm) -> Result<Vec<UserRecord>, Error>;
}
