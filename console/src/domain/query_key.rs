//! Cache keys for the read operations and the filters used to invalidate
//! them.
//!
//! Keys render as `users:{..}`, `user:<id>` and `search:<term>` in logs.

use std::fmt;

use pagination::PageRequest;
use serde::Serialize;

use super::filters::UserFilters;
use super::search::SearchTerm;
use super::user::UserId;

/// Parameters of a list query.
///
/// Filters are normalised on construction and collapse to `None` when
/// nothing is left, so equivalent requests share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQueryParams {
    #[serde(flatten)]
    pagination: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<UserFilters>,
}

impl UsersQueryParams {
    /// Normalise `filters`; blank criteria are dropped and an all-blank set
    /// becomes `None`.
    pub fn new(pagination: PageRequest, filters: Option<UserFilters>) -> Self {
        let filters = filters
            .map(|filters| filters.normalized())
            .filter(|filters| !filters.is_empty());
        Self { pagination, filters }
    }

    /// Page and page size.
    pub fn pagination(&self) -> PageRequest {
        self.pagination
    }

    /// Normalised filters, if any criterion is present.
    pub fn filters(&self) -> Option<&UserFilters> {
        self.filters.as_ref()
    }
}

impl Default for UsersQueryParams {
    fn default() -> Self {
        Self::new(PageRequest::default(), None)
    }
}

/// Identity of one cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Users(UsersQueryParams),
    User(UserId),
    Search(SearchTerm),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users(params) => match serde_json::to_string(params) {
                Ok(json) => write!(f, "users:{json}"),
                Err(_) => write!(f, "users:{params:?}"),
            },
            Self::User(id) => write!(f, "user:{id}"),
            Self::Search(term) => write!(f, "search:{term}"),
        }
    }
}

/// Partial key match used for invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKeyFilter {
    /// Every list key for this page and page size, whatever its filters.
    UsersPage(PageRequest),
    /// The single-record key for this id.
    User(UserId),
}

impl QueryKeyFilter {
    /// Whether `key` falls under this filter.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    /// use users_console::domain::{QueryKey, QueryKeyFilter, UserFilters, UsersQueryParams};
    ///
    /// let filtered = UsersQueryParams::new(
    ///     PageRequest::default(),
    ///     Some(UserFilters { status: Some("Active".into()), ..UserFilters::default() }),
    /// );
    /// let filter = QueryKeyFilter::UsersPage(PageRequest::default());
    /// assert!(filter.matches(&QueryKey::Users(filtered)));
    /// ```
    pub fn matches(&self, key: &QueryKey) -> bool {
        match (self, key) {
            (Self::UsersPage(page), QueryKey::Users(params)) => params.pagination == *page,
            (Self::User(id), QueryKey::User(key_id)) => id == key_id,
            _ => false,
        }
    }
}

impl fmt::Display for QueryKeyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsersPage(page) => {
                write!(f, "users:{{page:{},pageSize:{}}}", page.page(), page.page_size())
            }
            Self::User(id) => write!(f, "user:{id}"),
        }
    }
}
