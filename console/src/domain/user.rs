//! User record model.
//!
//! [`UserRecord`] serialises with camelCase keys so the persisted collection
//! keeps the layout the console has always stored. Only `id`, `organization`,
//! the contact fields, `dateJoined` and `status` take part in filtering; the
//! nested payload is carried through untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised when building record identifiers and enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    UnknownStatus { value: String },
    TierOutOfRange { value: u8 },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must not carry surrounding whitespace"),
            Self::UnknownStatus { value } => write!(
                f,
                "status must be one of Active, Inactive, Pending or Blacklisted, got {value:?}"
            ),
            Self::TierOutOfRange { value } => write!(f, "tier must be 1, 2 or 3, got {value}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque record identifier.
///
/// # Examples
/// ```
/// use users_console::domain::UserId;
///
/// let id = UserId::new("user-0001-3fa85f64").expect("valid id");
/// assert_eq!(id.as_ref(), "user-0001-3fa85f64");
/// assert!(UserId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Account status. Exactly four values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Inactive, Self::Pending, Self::Blacklisted];

    /// Wire representation, as stored and as matched by the status filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Blacklisted => "Blacklisted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = UserValidationError;

    /// Case-sensitive: `"active"` is not a status.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UserValidationError::UnknownStatus {
                value: value.to_owned(),
            })
    }
}

/// Loan tier, 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    /// Numeric tier value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Tier {
    type Error = UserValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=3).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UserValidationError::TierOutOfRange { value })
        }
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.0
    }
}

/// Personal details shown on the user detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name, also matched by search.
    pub full_name: String,
    /// Avatar image, when one was uploaded.
    pub avatar_url: Option<String>,
    /// Bank verification number.
    pub bvn: String,
    /// Gender as captured at onboarding.
    pub gender: String,
    /// Marital status.
    pub marital_status: String,
    /// Number of children, free text (`"None"` when absent).
    pub children: String,
    /// Housing arrangement.
    pub type_of_residence: String,
}

/// Headline account figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account balance in naira.
    pub balance: u64,
    /// Ten-digit account number.
    pub account_number: String,
    /// Bank holding the account.
    pub bank_name: String,
}

/// Education and employment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationAndEmployment {
    /// Highest qualification.
    pub level_of_education: String,
    /// Current employment status.
    pub employment_status: String,
    /// Industry sector.
    pub sector_of_employment: String,
    /// Time in current employment, free text.
    pub duration_of_employment: String,
    /// Work email address.
    pub office_email: String,
    /// Inclusive `[min, max]` income band.
    pub monthly_income: [u64; 2],
    /// Monthly loan repayment in naira.
    pub loan_repayment: u64,
}

/// Social media handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    /// Twitter handle.
    pub twitter: String,
    /// Facebook profile name.
    pub facebook: String,
    /// Instagram handle.
    pub instagram: String,
}

/// Loan guarantor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    /// Guarantor name.
    pub full_name: String,
    /// Guarantor phone number.
    pub phone_number: String,
    /// Guarantor email address.
    pub email: String,
    /// Relationship to the borrower.
    pub relationship: String,
}

/// A single user as stored in the record collection.
///
/// ## Invariants
/// - `id` is unique within a collection.
/// - `status` is one of the four [`UserStatus`] values.
/// - `date_joined` is an ISO-8601 timestamp; its first ten characters are the
///   calendar date used by the date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable identifier.
    pub id: UserId,
    /// Lending organisation the user belongs to.
    pub organization: String,
    /// Login handle, matched by the username filter.
    pub username: String,
    /// Contact email, matched by search and the email filter.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// ISO-8601 onboarding timestamp.
    pub date_joined: String,
    /// Current account status.
    pub status: UserStatus,
    /// Personal details.
    pub profile: Profile,
    /// Loyalty tier.
    pub tier: Tier,
    /// Headline account figures.
    pub account_summary: AccountSummary,
    /// Education and employment details.
    pub education_and_employment: EducationAndEmployment,
    /// Social media handles.
    pub socials: Socials,
    /// Loan guarantors, possibly none.
    pub guarantors: Vec<Guarantor>,
}

impl UserRecord {
    /// Name shown in tables and matched by search.
    pub fn display_name(&self) -> &str {
        self.profile.full_name.as_str()
    }

    /// Calendar date portion of `date_joined`.
    ///
    /// Timestamps shorter than ten characters are returned whole.
    pub fn date_joined_day(&self) -> &str {
        self.date_joined
            .get(..10)
            .unwrap_or(self.date_joined.as_str())
    }

    /// Copy of this record with a different status; every other field is
    /// unchanged.
    pub fn with_status(&self, status: UserStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests;
