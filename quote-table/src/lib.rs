//! Headless data tables for the quote back-office.
//!
//! A [`TableEngine`](table::TableEngine) takes rows that were already fetched
//! from the data store and derives a searched, sorted and paginated view with
//! page-scoped bulk selection. Row loading goes through an injected
//! [`RecordSource`](source::RecordSource), optionally fronted by a TTL
//! [`cache`].

pub mod cache;
pub mod error;
pub mod model;
pub mod source;
pub mod table;

pub use model::Record;
pub use model::RecordId;
pub use model::TableRecord;
pub use model::Value;
pub use table::TableEngine;
