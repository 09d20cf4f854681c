//! Pagination state and the window of page numbers shown to the user

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Maximum number of page buttons rendered at once
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Pagination metadata returned by list endpoints.
///
/// Consumed read-only: navigation availability comes from `has_next` and
/// `has_prev` as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationState {
    /// Nothing is rendered for an empty result set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    #[must_use]
    pub fn window(&self) -> RangeInclusive<u32> {
        page_window(self.current_page, self.total_pages)
    }

    /// One-based positions of the first and last item on the current page
    #[must_use]
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.is_empty() || self.limit == 0 {
            return None;
        }
        let page = u64::from(self.current_page.max(1));
        let limit = u64::from(self.limit);
        let first = (page - 1) * limit + 1;
        if first > self.total_items {
            return None;
        }
        let last = (page * limit).min(self.total_items);
        Some((first, last))
    }
}

/// Page numbers to render for `current_page` out of `total_pages`.
///
/// Short page counts are shown whole. Otherwise five pages are shown, centred
/// on the current page and pinned to either end near the boundaries.
#[must_use]
pub fn page_window(current_page: u32, total_pages: u32) -> RangeInclusive<u32> {
    if total_pages <= MAX_VISIBLE_PAGES {
        1..=total_pages
    } else if current_page <= 3 {
        1..=MAX_VISIBLE_PAGES
    } else if current_page >= total_pages - 2 {
        (total_pages - 4)..=total_pages
    } else {
        (current_page - 2)..=(current_page + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total).collect()
    }

    #[test]
    fn test_short_ranges_show_every_page() {
        for total in 0..=MAX_VISIBLE_PAGES {
            for current in 1..=total.max(1) {
                assert_eq!(window(current, total), (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_long_ranges_are_five_contiguous_clamped_pages() {
        for total in 6..=40 {
            for current in 0..=total + 2 {
                let pages = window(current, total);
                assert_eq!(pages.len(), 5, "current={current} total={total}");
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
                assert!(pages[0] >= 1);
                assert!(pages[4] <= total);
            }
        }
    }

    #[test]
    fn test_window_positions() {
        assert_eq!(window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_contains_current_page() {
        for total in 6..=20 {
            for current in 1..=total {
                assert!(page_window(current, total).contains(&current));
            }
        }
    }

    #[test]
    fn test_empty_state() {
        let state = PaginationState::default();
        assert!(state.is_empty());
        assert_eq!(state.item_range(), None);
    }

    #[test]
    fn test_item_range() {
        let state = PaginationState {
            current_page: 3,
            limit: 10,
            total_items: 27,
            total_pages: 3,
            has_next: false,
            has_prev: true,
        };
        assert_eq!(state.item_range(), Some((21, 27)));
    }

    #[test]
    fn test_deserializes_backend_shape() {
        let state: PaginationState = serde_json::from_str(
            r#"{"currentPage":2,"limit":10,"totalItems":35,"totalPages":4,"hasNext":true,"hasPrev":true}"#,
        )
        .unwrap();
        assert_eq!(state.current_page, 2);
        assert_eq!(state.window(), 1..=4);
    }
}
