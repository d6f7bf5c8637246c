//! The table engine: search, sort, paginate and bulk-select borrowed rows.

use std::fmt;

use super::BulkAction;
use super::Cell;
use super::Column;
use super::Page;
use super::PageItem;
use super::PageState;
use super::Selection;
use super::Sort;
use super::TableOptions;
use super::filter::filter_rows;
use super::next_sort;
use super::page::total_pages;
use super::page_window;
use super::sort::sort_rows;
use crate::model::RecordId;
use crate::model::TableRecord;

/// Callback receiving `(action value, selected ids)` on bulk dispatch.
pub type BulkHandler<'a> = Box<dyn FnMut(&str, &[RecordId]) + 'a>;

/// A headless data table over rows the caller already holds.
///
/// The engine borrows its rows and never mutates them. Every view
/// (filtered, sorted, paged) is derived again from the rows on each call, so
/// the engine can be queried after any state change without invalidation.
///
/// Pipeline: rows -> search filter -> sort -> page slice.
///
/// # Example
///
/// ```
/// use quote_table::model::Record;
/// use quote_table::table::{Column, TableEngine, TableOptions};
///
/// let rows = vec![
///     Record::new(1).set("name", "Zebra"),
///     Record::new(2).set("name", "Apple"),
///     Record::new(3).set("name", "Mango"),
/// ];
/// let mut table = TableEngine::new(
///     &rows,
///     vec![Column::new("name", "Name").sortable()],
///     TableOptions::new().items_per_page(2),
/// );
///
/// table.request_sort("name");
/// assert_eq!(table.total_pages(), 2);
/// let first: Vec<_> = table.visible_rows().iter().map(|r| r.id().to_string()).collect();
/// assert_eq!(first, vec!["2", "3"]);
/// ```
pub struct TableEngine<'a, R: TableRecord> {
    data: &'a [R],
    columns: Vec<Column<R>>,
    search_query: String,
    search_fields: Vec<R::Key>,
    bulk_actions: Vec<BulkAction>,
    sort: Option<Sort<R::Key>>,
    page: PageState,
    selection: Selection,
    on_bulk_action: Option<BulkHandler<'a>>,
}

impl<'a, R: TableRecord> TableEngine<'a, R> {
    /// Creates a table over `data`.
    ///
    /// A page size of zero in `options` is treated as one.
    pub fn new(data: &'a [R], columns: Vec<Column<R>>, options: TableOptions<R::Key>) -> Self {
        Self {
            data,
            columns,
            search_query: options.search_query,
            search_fields: options.search_fields,
            bulk_actions: options.bulk_actions,
            sort: None,
            page: PageState::new(options.items_per_page),
            selection: Selection::new(),
            on_bulk_action: None,
        }
    }

    /// Sets the bulk action handler (builder pattern).
    pub fn on_bulk_action(mut self, handler: impl FnMut(&str, &[RecordId]) + 'a) -> Self {
        self.set_bulk_handler(handler);
        self
    }

    /// Sets or replaces the bulk action handler.
    pub fn set_bulk_handler(&mut self, handler: impl FnMut(&str, &[RecordId]) + 'a) {
        self.on_bulk_action = Some(Box::new(handler));
    }

    // =========================================================================
    // Configuration accessors
    // =========================================================================

    /// The rows this table was built over, in caller order.
    pub fn data(&self) -> &'a [R] {
        self.data
    }

    /// Column definitions.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Bulk actions offered for the selection.
    pub fn bulk_actions(&self) -> &[BulkAction] {
        &self.bulk_actions
    }

    /// Current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Fields searched by the query.
    pub fn search_fields(&self) -> &[R::Key] {
        &self.search_fields
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<&Sort<R::Key>> {
        self.sort.as_ref()
    }

    /// Rows per page.
    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page()
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Rows matching the search query, in data order.
    pub fn filtered_rows(&self) -> Vec<&'a R> {
        filter_rows(self.data, &self.search_query, &self.search_fields)
    }

    /// Number of rows matching the search query.
    pub fn filtered_len(&self) -> usize {
        if self.search_query.is_empty() {
            self.data.len()
        } else {
            self.filtered_rows().len()
        }
    }

    /// Rows matching the search query, sorted by the current sort.
    pub fn processed_rows(&self) -> Vec<&'a R> {
        let mut rows = self.filtered_rows();
        if let Some(sort) = &self.sort {
            sort_rows(&mut rows, sort);
        }
        rows
    }

    /// Number of pages; an empty table has one empty page.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.page.items_per_page())
    }

    /// The current page (1-based), clamped to the pages that exist.
    pub fn current_page(&self) -> usize {
        self.page.effective_page(self.filtered_len())
    }

    /// The current page with its rows.
    pub fn page(&self) -> Page<'a, R> {
        let rows = self.processed_rows();
        let number = self.page.effective_page(rows.len());
        Page::slice(&rows, number, self.page.items_per_page())
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> Vec<&'a R> {
        self.page().into_rows()
    }

    /// Ids of the rows on the current page, in display order.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_rows().iter().map(|r| r.id()).collect()
    }

    /// Page numbers to show in the pagination control.
    pub fn page_window(&self) -> Vec<PageItem> {
        let len = self.filtered_len();
        page_window(self.page.effective_page(len), total_pages(len, self.page.items_per_page()))
    }

    /// Returns `true` if there is more than one page to navigate.
    pub fn needs_pagination(&self) -> bool {
        self.filtered_len() > self.page.items_per_page()
    }

    /// Renders one row through each column's renderer.
    pub fn render_row(&self, record: &R) -> Vec<Cell> {
        self.columns.iter().map(|column| column.render_cell(record)).collect()
    }

    // =========================================================================
    // Search and paging
    // =========================================================================

    /// Replaces the rows the table is built over.
    ///
    /// Sort, search and selection are kept; the current page is clamped to
    /// the new row count.
    pub fn set_data(&mut self, data: &'a [R]) {
        self.data = data;
        let len = self.filtered_len();
        let page = self.page.current_page();
        self.page.set_page(page, len);
    }

    /// Sets the search query. A changed query goes back to page 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            log::trace!("search query changed to {query:?}");
            self.search_query = query;
            self.page.reset();
        }
    }

    /// Sets the fields the query is matched against and goes back to page 1.
    pub fn set_search_fields(&mut self, fields: Vec<R::Key>) {
        self.search_fields = fields;
        self.page.reset();
    }

    /// Moves to page `page`, clamped into `1..=total_pages()`.
    pub fn set_page(&mut self, page: usize) {
        let len = self.filtered_len();
        self.page.set_page(page, len);
        log::trace!("page set to {} (requested {page})", self.page.current_page());
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page().saturating_add(1));
    }

    /// Moves to the previous page, if any.
    pub fn previous_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    /// Changes the page size and goes back to page 1. Zero is treated as one.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.page.set_items_per_page(items_per_page);
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Handles a sort request for `key`, typically a header click.
    ///
    /// Repeating the current key flips the direction; a new key sorts
    /// ascending. Keys of columns configured as non-sortable are ignored;
    /// keys without a column are accepted. Returns `true` if the sort
    /// changed.
    pub fn request_sort(&mut self, key: impl Into<R::Key>) -> bool {
        let key = key.into();
        if self.columns.iter().any(|column| column.key == key && !column.sortable) {
            log::debug!("ignoring sort request for non-sortable column {key:?}");
            return false;
        }

        let sort = next_sort(self.sort.take(), key);
        log::debug!("sorting by {:?} {:?}", sort.key, sort.direction);
        self.sort = Some(sort);
        true
    }

    /// Sets the sort directly.
    pub fn set_sort(&mut self, sort: Option<Sort<R::Key>>) {
        self.sort = sort;
    }

    /// Removes the sort, restoring data order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // =========================================================================
    // Selection and bulk actions
    // =========================================================================

    /// Selected row ids.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns `true` if the row with `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// Returns `true` if every row on the current page is selected.
    ///
    /// False on an empty page.
    pub fn is_all_selected(&self) -> bool {
        self.selection.contains_all(&self.visible_ids())
    }

    /// Toggles between "every row on the current page" and "nothing".
    ///
    /// Only the current page is selected, never the whole filtered set.
    pub fn toggle_select_all(&mut self) {
        let ids = self.visible_ids();
        if self.selection.contains_all(&ids) {
            self.selection.clear();
        } else {
            self.selection.replace(ids);
        }
    }

    /// Toggles one row. Returns `true` if it is selected afterwards.
    pub fn toggle_select_row(&mut self, id: impl Into<RecordId>) -> bool {
        self.selection.toggle(id.into())
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Passes the selected ids to the bulk handler, then clears the
    /// selection.
    ///
    /// With nothing selected this does nothing and returns `false`. The
    /// handler's outcome is not inspected: the selection is cleared either
    /// way, and failures are the handler's to report.
    pub fn dispatch_bulk_action(&mut self, action: &str) -> bool {
        if self.selection.is_empty() {
            log::debug!("bulk action {action:?} ignored: nothing selected");
            return false;
        }

        let ids = self.selection.selected();
        log::debug!("dispatching bulk action {action:?} for {} rows", ids.len());
        match self.on_bulk_action.as_mut() {
            Some(handler) => handler(action, &ids),
            None => log::warn!("bulk action {action:?} dispatched without a handler"),
        }

        self.selection.clear();
        true
    }
}

impl<R: TableRecord> fmt::Debug for TableEngine<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEngine")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("search_query", &self.search_query)
            .field("search_fields", &self.search_fields)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("selection", &self.selection)
            .field("bulk_actions", &self.bulk_actions)
            .field("on_bulk_action", &self.on_bulk_action.is_some())
            .finish()
    }
}
