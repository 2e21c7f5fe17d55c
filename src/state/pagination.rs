//! Pagination store.
//!
//! Tracks the current page over a fixed record count. Every operation clamps
//! into `[0, page_count - 1]`, or stays at 0 when there are no pages.

use std::ops::Range;
use tracing::trace;

/// Page navigation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Jump to page 0.
    First,
    /// One page back; no-op on the first page.
    Previous,
    /// One page forward; no-op on the last page.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to a page, clamped into range.
    Index(usize),
}

/// Current page and page size over `record_count` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    record_count: usize,
}

impl Pagination {
    /// Start on the first page.
    ///
    /// A zero `page_size` is raised to 1.
    pub fn new(page_size: usize, record_count: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            record_count,
        }
    }

    /// Zero-based current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page, always at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records being paged over.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// `ceil(record_count / page_size)`; 0 when there are no records.
    pub fn page_count(&self) -> usize {
        self.record_count.div_ceil(self.page_size)
    }

    /// Whether `Previous` would move.
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether `Next` would move.
    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Record positions (in sorted order) shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(self.record_count);
        let end = (start + self.page_size).min(self.record_count);
        start..end
    }

    /// Apply a navigation action.
    pub fn apply(&mut self, action: PageAction) {
        let before = self.page_index;
        match action {
            PageAction::First => self.go_to_first(),
            PageAction::Previous => self.go_to_previous(),
            PageAction::Next => self.go_to_next(),
            PageAction::Last => self.go_to_last(),
            PageAction::Index(index) => self.set_page_index(index),
        }
        trace!(?action, before, after = self.page_index, "Page action");
    }

    /// Jump to page 0.
    pub fn go_to_first(&mut self) {
        self.page_index = 0;
    }

    /// One page back, if possible.
    pub fn go_to_previous(&mut self) {
        if self.can_previous() {
            self.page_index -= 1;
        }
    }

    /// One page forward, if possible.
    pub fn go_to_next(&mut self) {
        if self.can_next() {
            self.page_index += 1;
        }
    }

    /// Jump to the last page.
    pub fn go_to_last(&mut self) {
        self.page_index = self.last_index();
    }

    /// Jump to `index`, clamped into range.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index.min(self.last_index());
    }

    /// Change the page size, keeping the first visible record on screen.
    ///
    /// The new page is the one containing the record that was at the top of
    /// the old page. A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        let top_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.set_page_index(top_row / page_size);
    }

    fn last_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }
}
