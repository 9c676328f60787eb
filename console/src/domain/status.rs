//! Status transition rules.
//!
//! The status modal offers a fixed set of actions per status:
//!
//! | Current | Actions |
//! |---|---|
//! | Pending | activate |
//! | Active | blacklist, inactivate |
//! | Inactive | activate |
//! | Blacklisted | activate |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserStatus;

/// Action offered by the status modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAction {
    Activate,
    Blacklist,
    Inactivate,
}

impl StatusAction {
    /// Status a record ends up in once the action is applied.
    pub const fn target_status(self) -> UserStatus {
        match self {
            Self::Activate => UserStatus::Active,
            Self::Blacklist => UserStatus::Blacklisted,
            Self::Inactivate => UserStatus::Inactive,
        }
    }

    /// Lower-case action name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Blacklist => "blacklist",
            Self::Inactivate => "inactivate",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions available for a record in `status`, in display order.
///
/// # Examples
/// ```
/// use users_console::domain::{StatusAction, UserStatus, available_actions};
///
/// assert_eq!(
///     available_actions(UserStatus::Active),
///     &[StatusAction::Blacklist, StatusAction::Inactivate]
/// );
/// ```
pub const fn available_actions(status: UserStatus) -> &'static [StatusAction] {
    match status {
        UserStatus::Active => &[StatusAction::Blacklist, StatusAction::Inactivate],
        UserStatus::Pending | UserStatus::Inactive | UserStatus::Blacklisted => {
            &[StatusAction::Activate]
        }
    }
}

/// Like [`available_actions`] for a raw status string; unrecognised values
/// have no actions.
pub fn available_actions_for(raw: &str) -> &'static [StatusAction] {
    match raw.parse::<UserStatus>() {
        Ok(status) => available_actions(status),
        Err(_) => &[],
    }
}

/// Badge tone used when rendering a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Default,
}

impl StatusTone {
    /// Tone of the badge for `status`.
    pub const fn for_status(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => Self::Success,
            UserStatus::Pending => Self::Warning,
            UserStatus::Blacklisted => Self::Error,
            UserStatus::Inactive => Self::Default,
        }
    }
}
