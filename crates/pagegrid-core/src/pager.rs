//! Fixed-size pagination over the cell list.

use std::ops::Range;

/// Cells shown per page.
pub const PAGE_SIZE: usize = 50;

/// Page cursor over `total_items` items split into pages of `page_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pager {
    /// A page size of zero is treated as one.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Absolute index of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Absolute indices shown on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Translate an index within the current page to an absolute index.
    pub fn to_absolute(&self, visible: usize) -> Option<usize> {
        let range = self.range();
        (visible < range.len()).then(|| range.start + visible)
    }

    /// Inverse of [`Pager::to_absolute`]; `None` if not on this page.
    pub fn to_visible(&self, absolute: usize) -> Option<usize> {
        let range = self.range();
        range.contains(&absolute).then(|| absolute - range.start)
    }

    /// Human-readable page indicator, e.g. `Page 1 of 20`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_cells_make_twenty_pages() {
        let pager = Pager::new(1000, PAGE_SIZE);
        assert_eq!(pager.total_pages(), 20);
        assert_eq!(pager.range(), 0..50);
        assert_eq!(pager.label(), "Page 1 of 20");
    }

    #[test]
    fn partial_last_page() {
        let mut pager = Pager::new(1001, PAGE_SIZE);
        assert_eq!(pager.total_pages(), 21);
        while pager.next() {}
        assert_eq!(pager.page(), 20);
        assert_eq!(pager.range(), 1000..1001);
        assert_eq!(pager.to_absolute(0), Some(1000));
        assert_eq!(pager.to_absolute(1), None);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut pager = Pager::new(1000, PAGE_SIZE);
        assert!(!pager.has_previous());
        assert!(!pager.previous());
        assert_eq!(pager.page(), 0);

        for _ in 0..19 {
            assert!(pager.next());
        }
        assert_eq!(pager.page(), 19);
        assert!(!pager.has_next());
        assert!(!pager.next());
        assert_eq!(pager.page(), 19);
        assert_eq!(pager.label(), "Page 20 of 20");
    }

    #[test]
    fn visible_index_translation() {
        let mut pager = Pager::new(1000, PAGE_SIZE);
        pager.next();
        pager.next();
        assert_eq!(pager.offset(), 100);
        assert_eq!(pager.to_absolute(7), Some(107));
        assert_eq!(pager.to_absolute(50), None);
        assert_eq!(pager.to_visible(149), Some(49));
        assert_eq!(pager.to_visible(150), None);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut pager = Pager::new(0, PAGE_SIZE);
        assert_eq!(pager.total_pages(), 0);
        assert!(!pager.next());
        assert_eq!(pager.range(), 0..0);
    }
}
