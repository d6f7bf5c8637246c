//! Page state and page views.

use std::ops::Range;

use super::DEFAULT_ITEMS_PER_PAGE;

/// Number of pages needed for `len` rows, never less than one.
///
/// An empty table still renders as a single empty page.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}

/// Row index range of `page` (1-based), clamped to `len`.
///
/// A page past the end yields an empty range.
pub fn page_range(page: usize, items_per_page: usize, len: usize) -> Range<usize> {
    let items_per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(items_per_page).min(len);
    let end = start.saturating_add(items_per_page).min(len);
    start..end
}

/// Current page and page size of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageState {
    /// Creates a page state on page 1. A page size of zero becomes one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Requested page, not yet clamped against the row count.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The current page clamped into `1..=total_pages(len)`.
    pub fn effective_page(&self, len: usize) -> usize {
        self.current_page.clamp(1, total_pages(len, self.items_per_page))
    }

    /// Moves to `page`, clamped against `len` rows.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, total_pages(len, self.items_per_page));
    }

    /// Changes the page size and goes back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Goes back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

/// One page of a table's processed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    rows: Vec<&'a R>,
    number: usize,
    total_pages: usize,
    total_items: usize,
    offset: usize,
}

impl<'a, R> Page<'a, R> {
    /// Cuts page `number` out of `rows`.
    pub fn slice(rows: &[&'a R], number: usize, items_per_page: usize) -> Self {
        let total_pages = total_pages(rows.len(), items_per_page);
        let number = number.clamp(1, total_pages);
        let range = page_range(number, items_per_page, rows.len());
        Self {
            offset: range.start,
            rows: rows[range].to_vec(),
            number,
            total_pages,
            total_items: rows.len(),
        }
    }

    /// Rows on this page.
    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    /// Consumes the page and returns its rows.
    pub fn into_rows(self) -> Vec<&'a R> {
        self.rows
    }

    /// Page number (1-based).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of rows across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// 1-based positions of the first and last row on this page, for
    /// "showing 11-20 of 25". `None` when the page is empty.
    pub fn item_span(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.offset + self.rows.len()))
        }
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}
