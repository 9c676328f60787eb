//! Offset pagination primitives shared by the users console.
//!
//! The crate covers three concerns:
//!
//! - [`PageRequest`]: the validated `page` / `pageSize` pair accepted from the
//!   routing layer.
//! - [`paginate`]: slicing a filtered record set into one page and reporting
//!   how many pages exist.
//! - [`page_range`] and [`PaginationControls`]: the bounded window of page
//!   buttons (with ellipses) rendered beneath a table.
//!
//! # Example
//!
//! ```
//! use pagination::{PageSlot, PaginationControls, paginate};
//!
//! let records: Vec<u32> = (1..=3).collect();
//! let first = paginate(&records, 1, 2);
//! assert_eq!(first.items, &[1, 2]);
//! assert_eq!(first.total_pages, 2);
//!
//! let controls = PaginationControls::build(10, 20, 1).expect("more than one page");
//! assert_eq!(controls.slots.first(), Some(&PageSlot::Page(1)));
//! assert_eq!(controls.slots.last(), Some(&PageSlot::Page(20)));
//! ```

mod offset;
mod request;
mod window;

pub use offset::{PageSlice, paginate, total_pages};
pub use request::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageRequestError,
};
pub use window::{DEFAULT_SIBLING_COUNT, PageSlot, PaginationControls, page_range, slot_budget};
