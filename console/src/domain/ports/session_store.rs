//! Port for the signed-in operator marker.
//!
//! Route guards only check for presence; the stored value is the email used
//! to sign in.

use async_trait::async_trait;

use crate::domain::AuthenticatedUser;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session marker adapters.
    pub enum SessionStoreError {
        /// The backing storage failed.
        Storage { message: String } => "session storage failed: {message}",
    }
}

/// Persistence for the signed-in marker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The marker, if one is set.
    async fn current(&self) -> Result<Option<AuthenticatedUser>, SessionStoreError>;

    /// Set the marker.
    async fn mark(&self, user: &AuthenticatedUser) -> Result<(), SessionStoreError>;

    /// Remove the marker. Clearing an absent marker succeeds.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
