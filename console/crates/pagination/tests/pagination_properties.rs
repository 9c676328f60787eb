//! Generated checks for page slicing and the page-number window.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::{PageSlot, PaginationControls, page_range, paginate, slot_budget};
use proptest::prelude::*;

proptest! {
    #[test]
    fn total_pages_matches_ceiling_division(len in 0_usize..500, page_size in 1_usize..=100) {
        let items: Vec<usize> = (0..len).collect();
        let expected = len.div_ceil(page_size).max(1);
        prop_assert_eq!(paginate(&items, 1, page_size).total_pages, expected);
    }

    #[test]
    fn concatenated_pages_rebuild_the_input(len in 0_usize..300, page_size in 1_usize..=100) {
        let items: Vec<usize> = (0..len).collect();
        let total = paginate(&items, 1, page_size).total_pages;
        let rebuilt: Vec<usize> = (1..=total)
            .flat_map(|page| paginate(&items, page, page_size).items.iter().copied())
            .collect();
        prop_assert_eq!(rebuilt, items);
    }

    #[test]
    fn window_never_exceeds_the_slot_budget(
        total in 0_usize..200,
        current_seed in 1_usize..200,
        siblings in 0_usize..4,
    ) {
        let current = current_seed.min(total.max(1));
        let slots = page_range(current, total, siblings);
        let budget = slot_budget(siblings);
        prop_assert!(slots.len() <= budget);

        let ellipses = slots.iter().filter(|slot| **slot == PageSlot::Ellipsis).count();
        if total <= budget {
            prop_assert_eq!(ellipses, 0);
            prop_assert_eq!(slots.len(), total);
        } else {
            prop_assert_eq!(slots.first(), Some(&PageSlot::Page(1)));
            prop_assert_eq!(slots.last(), Some(&PageSlot::Page(total)));
            prop_assert!((1..=2).contains(&ellipses));
            prop_assert!(slots.contains(&PageSlot::Page(current)));
            prop_assert_eq!(slots.len(), budget);
        }
    }

    #[test]
    fn controls_render_only_for_multiple_pages(total in -50_i64..50, current in 1_usize..60) {
        let controls = PaginationControls::build(current, total, 1);
        prop_assert_eq!(controls.is_some(), total > 1);
    }
}

#[test]
fn middle_of_twenty_pages_shows_both_ellipses() {
    let controls = PaginationControls::build(10, 20, 1).expect("controls render");
    assert_eq!(
        controls.slots,
        vec![
            PageSlot::Page(1),
            PageSlot::Ellipsis,
            PageSlot::Page(9),
            PageSlot::Page(10),
            PageSlot::Page(11),
            PageSlot::Ellipsis,
            PageSlot::Page(20),
        ]
    );
}
