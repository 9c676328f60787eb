//! Filter predicate over a record collection.
//!
//! Matching rules per criterion, after trimming:
//! - `organization`, `status`: exact, case-sensitive.
//! - `username`, `email`: case-insensitive substring.
//! - `phone_number`: case-sensitive substring, separators untouched.
//! - `date_joined`: equal to the first ten characters of the timestamp.
//!
//! Present criteria are combined with AND; blank criteria are absent.

use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Filter form values. Every field is optional.
///
/// # Examples
/// ```
/// use users_console::domain::UserFilters;
///
/// let filters = UserFilters {
///     organization: Some("  Lendsqr ".into()),
///     username: Some("   ".into()),
///     ..UserFilters::default()
/// }
/// .normalized();
/// assert_eq!(filters.organization.as_deref(), Some("Lendsqr"));
/// assert_eq!(filters.username, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilters {
    /// Exact organisation name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Case-insensitive substring of the username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Case-insensitive substring of the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Substring of the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Calendar date (`YYYY-MM-DD`) the user joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
    /// Exact status name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn normalize(value: Option<&String>) -> Option<String> {
    value
        .map(|raw| raw.trim())
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

impl UserFilters {
    /// Trim every field and drop the ones left empty.
    pub fn normalized(&self) -> Self {
        Self {
            organization: normalize(self.organization.as_ref()),
            username: normalize(self.username.as_ref()),
            email: normalize(self.email.as_ref()),
            phone_number: normalize(self.phone_number.as_ref()),
            date_joined: normalize(self.date_joined.as_ref()),
            status: normalize(self.status.as_ref()),
        }
    }

    /// True when no field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        self.normalized() == Self::default()
    }

    /// Whether `record` satisfies every present criterion.
    pub fn matches(&self, record: &UserRecord) -> bool {
        Predicate::new(self).matches(record)
    }
}

/// Criteria prepared once per filter pass.
struct Predicate {
    organization: Option<String>,
    username: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    date_joined: Option<String>,
    status: Option<String>,
}

impl Predicate {
    fn new(filters: &UserFilters) -> Self {
        let UserFilters {
            organization,
            username,
            email,
            phone_number,
            date_joined,
            status,
        } = filters.normalized();
        Self {
            organization,
            username: username.map(|value| value.to_lowercase()),
            email: email.map(|value| value.to_lowercase()),
            phone_number,
            date_joined,
            status,
        }
    }

    fn matches(&self, record: &UserRecord) -> bool {
        self.organization
            .as_deref()
            .is_none_or(|org| record.organization == org)
            && self
                .status
                .as_deref()
                .is_none_or(|status| record.status.as_str() == status)
            && self
                .username
                .as_deref()
                .is_none_or(|needle| record.username.to_lowercase().contains(needle))
            && self
                .email
                .as_deref()
                .is_none_or(|needle| record.email.to_lowercase().contains(needle))
            && self
                .phone_number
                .as_deref()
                .is_none_or(|needle| record.phone_number.contains(needle))
            && self
                .date_joined
                .as_deref()
                .is_none_or(|date| record.date_joined_day() == date)
    }
}

/// Records matching `filters`, in their original order.
///
/// Pure: the input is never modified and no criteria returns every record.
pub fn apply_filters(records: &[UserRecord], filters: &UserFilters) -> Vec<UserRecord> {
    let predicate = Predicate::new(filters);
    records
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect()
}
