//! Slide ↔ page arithmetic for a fixed items-per-view.

use std::ops::Range;

/// Pure mapping between slide and page indices.
///
/// The final page may hold fewer than `items_per_view` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMap {
    total_items: usize,
    items_per_view: usize,
}

impl PageMap {
    /// `items_per_view` below one is treated as one.
    pub fn new(total_items: usize, items_per_view: usize) -> Self {
        Self {
            total_items,
            items_per_view: items_per_view.max(1),
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.items_per_view)
    }

    pub fn slide_to_page(&self, slide: usize) -> usize {
        slide / self.items_per_view
    }

    /// First slide of `page`, never past the last slide.
    pub fn page_to_slide(&self, page: usize) -> usize {
        page.saturating_mul(self.items_per_view)
            .min(self.total_items.saturating_sub(1))
    }

    /// Slides on `page`; zero for pages past the end.
    pub fn page_len(&self, page: usize) -> usize {
        self.page_range(page).len()
    }

    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = page
            .saturating_mul(self.items_per_view)
            .min(self.total_items);
        let end = start.saturating_add(self.items_per_view).min(self.total_items);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn eight_items_three_per_view() {
        let map = PageMap::new(8, 3);
        assert_eq!(map.page_count(), 3);
        assert_eq!(map.page_len(0), 3);
        assert_eq!(map.page_len(1), 3);
        assert_eq!(map.page_len(2), 2);
        assert_eq!(map.page_range(2), 6..8);
        assert_eq!(map.page_len(3), 0);
    }

    #[test]
    fn page_to_slide_clamps_to_last_slide() {
        let map = PageMap::new(8, 3);
        assert_eq!(map.page_to_slide(1), 3);
        assert_eq!(map.page_to_slide(2), 6);
        assert_eq!(map.page_to_slide(9), 7);
    }

    #[test]
    fn empty_sequence_has_no_pages() {
        let map = PageMap::new(0, 3);
        assert_eq!(map.page_count(), 0);
        assert_eq!(map.page_to_slide(0), 0);
        assert_eq!(map.page_range(0), 0..0);
    }

    #[test]
    fn zero_per_view_is_coerced() {
        assert_eq!(PageMap::new(4, 0).items_per_view(), 1);
    }

    proptest! {
        #[test]
        fn page_count_is_ceiling(total in 0usize..500, ipv in 1usize..20) {
            let map = PageMap::new(total, ipv);
            let expected = (total + ipv - 1) / ipv;
            prop_assert_eq!(map.page_count(), expected);
            prop_assert_eq!(map.page_count() == 0, total == 0);
        }

        #[test]
        fn pages_partition_the_sequence(total in 0usize..200, ipv in 1usize..12) {
            let map = PageMap::new(total, ipv);
            let covered: usize = (0..map.page_count()).map(|p| map.page_len(p)).sum();
            prop_assert_eq!(covered, total);
        }

        #[test]
        fn first_slide_of_page_maps_back(
            total in 1usize..200,
            ipv in 1usize..12,
            page in 0usize..40,
        ) {
            let map = PageMap::new(total, ipv);
            let page = page % map.page_count();
            prop_assert_eq!(map.slide_to_page(map.page_to_slide(page)), page);
        }
    }
}
