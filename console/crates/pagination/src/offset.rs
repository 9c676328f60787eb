//! Slice computation over an already filtered record set.

/// One page of items borrowed from the filtered set, plus the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on the requested page; empty when the page is out of range.
    pub items: &'a [T],
    /// Number of pages in the filtered set, never less than one.
    pub total_pages: usize,
}

/// Number of pages needed for `count` items, never less than one.
///
/// A zero page size cannot hold any items, so it reports a single empty page.
///
/// # Examples
///
/// ```
/// use pagination::total_pages;
///
/// assert_eq!(total_pages(0, 10), 1);
/// assert_eq!(total_pages(20, 10), 2);
/// assert_eq!(total_pages(21, 10), 3);
/// ```
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    let pages = count.div_ceil(page_size);
    if pages < 1 { 1 } else { pages }
}

/// Slice `items` to the one-based `page` of `page_size` entries.
///
/// Neither argument is clamped: page zero and pages beyond the end yield an
/// empty slice rather than an error. Offsets saturate so that absurd inputs
/// cannot overflow.
///
/// # Examples
///
/// ```
/// use pagination::paginate;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(paginate(&items, 2, 2).items, &["c"]);
/// assert!(paginate(&items, 10, 2).items.is_empty());
/// assert_eq!(paginate(&items, 10, 2).total_pages, 2);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let total = total_pages(items.len(), page_size);
    let Some(previous_pages) = page.checked_sub(1) else {
        return PageSlice {
            items: &[],
            total_pages: total,
        };
    };

    let start = previous_pages.saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    PageSlice {
        items: items.get(start..end).unwrap_or_default(),
        total_pages: total,
    }
}
