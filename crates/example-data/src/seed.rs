//! Generated user seed types.
//!
//! These mirror the persisted record layout of the users console without
//! depending on its domain types; the console converts them at the point of
//! use.

use serde::{Deserialize, Serialize};

/// Account status assigned to a generated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusSeed {
    /// Account in good standing.
    #[default]
    Active,
    /// Dormant account.
    Inactive,
    /// Awaiting review.
    Pending,
    /// Barred from borrowing.
    Blacklisted,
}

impl StatusSeed {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Inactive,
        Self::Pending,
        Self::Blacklisted,
    ];
}

/// Personal details shown on the user detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSeed {
    /// First and last name separated by a space.
    pub full_name: String,
    /// Always `null` in generated data.
    pub avatar_url: Option<String>,
    /// Eleven-digit bank verification number.
    pub bvn: String,
    /// Gender label.
    pub gender: String,
    /// Marital status label.
    pub marital_status: String,
    /// `None` or a small count rendered as text.
    pub children: String,
    /// Type of residence label.
    pub type_of_residence: String,
}

/// Bank account summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummarySeed {
    /// Balance in whole naira.
    pub balance: u64,
    /// Ten-digit account number.
    pub account_number: String,
    /// Bank holding the account.
    pub bank_name: String,
}

/// Education and employment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationAndEmploymentSeed {
    /// Highest qualification.
    pub level_of_education: String,
    /// Employment status label.
    pub employment_status: String,
    /// Sector of employment.
    pub sector_of_employment: String,
    /// Duration such as `3 years`.
    pub duration_of_employment: String,
    /// Work email address.
    pub office_email: String,
    /// Monthly income band as `[min, max]`.
    pub monthly_income: [u64; 2],
    /// Monthly loan repayment.
    pub loan_repayment: u64,
}

/// Social media handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialsSeed {
    /// Twitter handle.
    pub twitter: String,
    /// Facebook display name.
    pub facebook: String,
    /// Instagram handle.
    pub instagram: String,
}

/// A person vouching for the borrower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuarantorSeed {
    /// Guarantor's name.
    pub full_name: String,
    /// Guarantor's phone number.
    pub phone_number: String,
    /// Guarantor's email address.
    pub email: String,
    /// Relationship to the borrower.
    pub relationship: String,
}

/// A generated example user record.
///
/// Serialises with the camelCase keys the users console persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Identifier of the form `user-0001-1a2b3c4d`.
    pub id: String,
    /// Organization the user borrows through.
    pub organization: String,
    /// Login name, first and last name concatenated.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Eleven-digit phone number starting with `0`.
    pub phone_number: String,
    /// Join timestamp, `YYYY-MM-DDTHH:MM:00.000Z`.
    pub date_joined: String,
    /// Account status.
    pub status: StatusSeed,
    /// Personal details.
    pub profile: ProfileSeed,
    /// Tier between 1 and 3.
    pub tier: u8,
    /// Bank account summary.
    pub account_summary: AccountSummarySeed,
    /// Education and employment details.
    pub education_and_employment: EducationAndEmploymentSeed,
    /// Social media handles.
    pub socials: SocialsSeed,
    /// Guarantors, two per generated user.
    pub guarantors: Vec<GuarantorSeed>,
}
