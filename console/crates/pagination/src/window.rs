//! Bounded page-number window for pagination controls.
//!
//! The window always shows the first and last pages, the current page and
//! `sibling_count` neighbours on either side, collapsing the gaps into
//! ellipses. Away from the boundaries the number of slots stays constant as
//! the current page moves, so the control does not change width.

use serde::Serialize;

/// Neighbours shown on each side of the current page by default.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// A single entry in the rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "page")]
pub enum PageSlot {
    /// A clickable page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Maximum number of slots the window renders once pages overflow:
/// first, last, current, two ellipses and the siblings.
#[must_use]
pub const fn slot_budget(sibling_count: usize) -> usize {
    sibling_count.saturating_mul(2).saturating_add(5)
}

fn pages(start: usize, end: usize) -> impl Iterator<Item = PageSlot> {
    (start..=end).map(PageSlot::Page)
}

/// Compute the window of page slots for `current_page` out of `total_pages`.
///
/// When every page fits in [`slot_budget`] the full range is returned without
/// ellipses (an empty vector for zero pages). Otherwise the first and last
/// pages are pinned and the gaps on either side of the current page's
/// siblings collapse into [`PageSlot::Ellipsis`].
///
/// # Examples
///
/// ```
/// use pagination::{PageSlot, page_range};
///
/// let slots = page_range(10, 20, 1);
/// assert_eq!(
///     slots,
///     vec![
///         PageSlot::Page(1),
///         PageSlot::Ellipsis,
///         PageSlot::Page(9),
///         PageSlot::Page(10),
///         PageSlot::Page(11),
///         PageSlot::Ellipsis,
///         PageSlot::Page(20),
///     ]
/// );
/// ```
#[must_use]
pub fn page_range(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageSlot> {
    let budget = slot_budget(sibling_count);
    if total_pages <= budget {
        return pages(1, total_pages).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page
        .saturating_add(sibling_count)
        .min(total_pages);

    let show_left_gap = left_sibling > 2;
    let show_right_gap = right_sibling < total_pages.saturating_sub(2);
    // Pages shown on the long side when only one gap exists.
    let edge_run = sibling_count.saturating_mul(2).saturating_add(3);

    match (show_left_gap, show_right_gap) {
        (false, true) => pages(1, edge_run)
            .chain([PageSlot::Ellipsis, PageSlot::Page(total_pages)])
            .collect(),
        (true, false) => [PageSlot::Page(1), PageSlot::Ellipsis]
            .into_iter()
            .chain(pages(
                total_pages.saturating_sub(edge_run).saturating_add(1),
                total_pages,
            ))
            .collect(),
        (true, true) => [PageSlot::Page(1), PageSlot::Ellipsis]
            .into_iter()
            .chain(pages(left_sibling, right_sibling))
            .chain([PageSlot::Ellipsis, PageSlot::Page(total_pages)])
            .collect(),
        (false, false) => pages(1, total_pages).collect(),
    }
}

/// Render state for a pagination control: the page window plus the targets
/// of the previous and next arrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationControls {
    /// Page currently highlighted.
    pub current_page: usize,
    /// Slots to render between the arrows.
    pub slots: Vec<PageSlot>,
    /// Page the previous arrow navigates to; `None` disables it.
    pub previous: Option<usize>,
    /// Page the next arrow navigates to; `None` disables it.
    pub next: Option<usize>,
}

impl PaginationControls {
    /// Build the control state, or `None` when there is nothing to render.
    ///
    /// A single page, zero pages and negative page counts all render nothing.
    /// This is distinct from [`crate::paginate`], which still reports one
    /// page for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PaginationControls;
    ///
    /// assert!(PaginationControls::build(1, 1, 1).is_none());
    /// assert!(PaginationControls::build(1, -3, 1).is_none());
    ///
    /// let controls = PaginationControls::build(1, 3, 1).expect("three pages");
    /// assert_eq!(controls.previous, None);
    /// assert_eq!(controls.next, Some(2));
    /// ```
    #[must_use]
    pub fn build(current_page: usize, total_pages: i64, sibling_count: usize) -> Option<Self> {
        let total = usize::try_from(total_pages).ok().filter(|total| *total > 1)?;
        let previous = current_page.checked_sub(1).filter(|page| *page >= 1);
        let next = current_page.checked_add(1).filter(|page| *page <= total);

        Some(Self {
            current_page,
            slots: page_range(current_page, total, sibling_count),
            previous,
            next,
        })
    }
}
