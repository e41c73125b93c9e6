//! Fixed-size pagination.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page (0-based) and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, page: 0 }
    }
}

/// 1-based "from-to of total" bounds for the footer. `from` is 0 when empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), page: 0 }
    }

    /// Number of pages for `total` rows; an empty grid still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Current page clamped into range for `total` rows.
    pub fn effective_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    /// Index range of the rows on the current page.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = self.effective_page(total) * self.page_size.max(1);
        let end = (start + self.page_size.max(1)).min(total);
        start.min(end)..end
    }

    pub fn summary(&self, total: usize) -> PageSummary {
        let range = self.bounds(total);
        let from = if range.is_empty() { 0 } else { range.start + 1 };
        PageSummary { from, to: range.end, total }
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn previous(&mut self, total: usize) {
        self.page = self.effective_page(total).saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.page = (self.effective_page(total) + 1).min(self.page_count(total) - 1);
    }

    pub fn last(&mut self, total: usize) {
        self.page = self.page_count(total) - 1;
    }

    pub fn has_previous(&self, total: usize) -> bool {
        self.effective_page(total) > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.effective_page(total) + 1 < self.page_count(total)
    }
}
