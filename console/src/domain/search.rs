//! Free-text search over display names and emails.

use std::fmt;

use serde::Serialize;

use super::user::UserRecord;

/// Most results a search returns.
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// A normalised, non-empty search term.
///
/// Holding a `SearchTerm` means search is enabled: blank input never produces
/// one.
///
/// # Examples
/// ```
/// use users_console::domain::SearchTerm;
///
/// let term = SearchTerm::parse("  John ").expect("non-blank");
/// assert_eq!(term.as_str(), "john");
/// assert!(SearchTerm::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trim and lower-case `raw`; `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        (!normalized.is_empty()).then_some(Self(normalized))
    }

    /// The normalised term.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.0
    }
}

/// Up to [`SEARCH_RESULT_LIMIT`] records whose display name or email contains
/// `term`, case-insensitively, in store order.
pub fn search(records: &[UserRecord], term: &SearchTerm) -> Vec<UserRecord> {
    let needle = term.as_str();
    records
        .iter()
        .filter(|record| {
            record.display_name().to_lowercase().contains(needle)
                || record.email.to_lowercase().contains(needle)
        })
        .take(SEARCH_RESULT_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_support::{numbered_users, reference_users};

    fn term(raw: &str) -> SearchTerm {
        SearchTerm::parse(raw).expect("non-blank term")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_input_disables_search(#[case] raw: &str) {
        assert_eq!(SearchTerm::parse(raw), None);
    }

    #[rstest]
    #[case("john", &["1"])]
    #[case("JANE SMITH", &["2"])]
    #[case("irorun.com", &["2"])]
    #[case("lendsqr", &["1", "3"])]
    #[case("nobody", &[])]
    fn matches_name_or_email(#[case] raw: &str, #[case] expected: &[&str]) {
        let found = search(&reference_users(), &term(raw));
        let ids: Vec<&str> = found.iter().map(|record| record.id.as_ref()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn results_are_capped_at_the_limit_in_store_order() {
        let records = numbered_users(50, "Lendsqr");
        let found = search(&records, &term("user"));
        assert_eq!(found.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(found.first().map(UserRecord::display_name), Some("User 1"));
        assert_eq!(found.last().map(UserRecord::display_name), Some("User 20"));
    }

    #[test]
    fn serialises_as_the_normalised_string() {
        let json = serde_json::to_string(&term("  MiXeD ")).expect("serialise");
        assert_eq!(json, r#""mixed""#);
    }
}
