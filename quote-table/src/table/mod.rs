//! Headless table engine.
//!
//! The engine turns a borrowed slice of rows into the view a back-office
//! screen shows:
//! - Free-text search over chosen fields or over every field
//! - Single-column sorting that toggles on repeated requests
//! - Page slicing with an elided page-number window
//! - Page-scoped row selection feeding bulk actions
//!
//! Rendering stays outside: columns produce UI-agnostic [`Cell`]s and the
//! caller draws them.

mod column;
mod engine;
mod filter;
mod options;
mod page;
mod selection;
mod sort;
mod window;

pub use column::{Alignment, Cell, CellRenderer, Column};
pub use engine::{BulkHandler, TableEngine};
pub use filter::{filter_rows, matches};
pub use options::{BulkAction, DEFAULT_ITEMS_PER_PAGE, TableOptions, Variant};
pub use page::{Page, PageState, page_range, total_pages};
pub use selection::Selection;
pub use sort::{Direction, Sort, compare_rows, next_sort, sort_rows};
pub use window::{PageItem, WINDOW_SIZE, page_window};
