//! Result of a list query: organisation options, the filtered set and the
//! requested page.

use std::cmp::Ordering;

use pagination::paginate;
use serde::Serialize;

use super::filters::apply_filters;
use super::query_key::UsersQueryParams;
use super::user::UserRecord;

/// One page of the users table plus what the surrounding controls need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    /// Distinct organisations across the whole collection, sorted.
    pub organizations: Vec<String>,
    /// Every record that passed the filters, in store order.
    pub filtered_users: Vec<UserRecord>,
    /// Pages in the filtered set, never less than one.
    pub total_pages: usize,
    /// Records on the requested page.
    pub page_users: Vec<UserRecord>,
}

impl UsersPage {
    /// Compute the page for `params` over the full collection.
    pub fn build(records: &[UserRecord], params: &UsersQueryParams) -> Self {
        let organizations = distinct_organizations(records);
        let filtered_users = match params.filters() {
            Some(filters) => apply_filters(records, filters),
            None => records.to_vec(),
        };
        let pagination = params.pagination();
        let slice = paginate(&filtered_users, pagination.page(), pagination.page_size());
        let page_users = slice.items.to_vec();
        let total_pages = slice.total_pages;

        Self {
            organizations,
            filtered_users,
            total_pages,
            page_users,
        }
    }

    /// Number of records that passed the filters.
    pub fn filtered_count(&self) -> usize {
        self.filtered_users.len()
    }
}

/// Case-insensitive primary order; on ties lower case sorts first.
pub(crate) fn locale_order(left: &str, right: &str) -> Ordering {
    let swap_case = |c: char| {
        if c.is_lowercase() {
            c.to_uppercase().next().unwrap_or(c)
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    };
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.chars().map(swap_case).cmp(right.chars().map(swap_case)))
}

fn distinct_organizations(records: &[UserRecord]) -> Vec<String> {
    let mut organizations: Vec<String> = records
        .iter()
        .map(|record| record.organization.clone())
        .collect();
    organizations.sort_by(|left, right| locale_order(left, right));
    organizations.dedup();
    organizations
}
