//! Driving port for changing a user's status.

use async_trait::async_trait;
use pagination::PageRequest;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, StatusAction, UserId, UserRecord, UserStatus};

/// Request to set a record's status directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// Record to change.
    pub user_id: UserId,
    /// Status to set.
    pub status: UserStatus,
    /// Page the caller was viewing; its list entries are invalidated.
    /// Defaults to page 1 of 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

/// Request to apply one of the status modal's actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusActionRequest {
    /// Record to change.
    pub user_id: UserId,
    /// Action picked in the modal; must be available for the current status.
    pub action: StatusAction,
    /// Page the caller was viewing; defaults to page 1 of 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

/// Driving port for status mutations.
///
/// Implementations persist the whole collection and invalidate the affected
/// list page and detail entries before returning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStatusCommand: Send + Sync {
    /// Set the status of one record and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error, without writing anything, when no record has
    /// the requested id.
    async fn update_status(&self, request: &UpdateStatusRequest) -> Result<UserRecord, Error>;

    /// Apply a modal action after checking it is offered for the record's
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error when the action is not available, and
    /// a not-found error when the record does not exist.
    async fn apply_action(&self, request: &StatusActionRequest) -> Result<UserRecord, Error>;
}
