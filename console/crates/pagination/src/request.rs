//! Validated page parameters accepted from the routing layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page selected when the caller does not provide one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size selected when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Errors raised when page parameters fall outside the accepted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Pages are numbered from one.
    #[error("page must be at least 1, got {page}")]
    PageOutOfRange {
        /// Rejected page number.
        page: usize,
    },
    /// Page size must lie between one and [`MAX_PAGE_SIZE`].
    #[error("page size must be between 1 and {max}, got {page_size}")]
    PageSizeOutOfRange {
        /// Rejected page size.
        page_size: usize,
        /// Upper bound that was exceeded.
        max: usize,
    },
}

/// A one-based page number paired with a page size.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= page_size <= MAX_PAGE_SIZE`
///
/// Serialises as `{"page": 1, "pageSize": 20}`; deserialisation re-applies
/// the bounds and fills in defaults for missing fields.
///
/// # Examples
///
/// ```
/// use pagination::{PageRequest, PageRequestError};
///
/// let request = PageRequest::new(2, 50).expect("valid bounds");
/// assert_eq!(request.page(), 2);
/// assert_eq!(request.offset(), 50);
///
/// assert_eq!(
///     PageRequest::new(1, 101),
///     Err(PageRequestError::PageSizeOutOfRange { page_size: 101, max: 100 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest", into = "RawPageRequest")]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when `page` is zero or `page_size` is
    /// outside `1..=MAX_PAGE_SIZE`.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        if page < 1 {
            return Err(PageRequestError::PageOutOfRange { page });
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(PageRequestError::PageSizeOutOfRange {
                page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self { page, page_size })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Same page size, different page; falls back to page one when `page` is
    /// zero.
    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: self.page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

const fn default_page() -> usize {
    DEFAULT_PAGE
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PageRequestError;

    fn try_from(value: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(value.page, value.page_size)
    }
}

impl From<PageRequest> for RawPageRequest {
    fn from(value: PageRequest) -> Self {
        Self {
            page: value.page,
            page_size: value.page_size,
        }
    }
}
