//! Column descriptors and cell rendering.

use std::fmt;
use std::sync::Arc;

use super::Variant;
use crate::model::TableRecord;
use crate::model::Value;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A UI-agnostic rendered cell.
///
/// Front ends map these onto their own widgets; the engine never needs to
/// know which toolkit draws the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing to show.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// A short label drawn as a badge, e.g. a quote status.
    Badge { label: String, variant: Variant },
}

impl Cell {
    /// Creates a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Creates a badge cell.
    pub fn badge(label: impl Into<String>, variant: Variant) -> Self {
        Cell::Badge {
            label: label.into(),
            variant,
        }
    }

    /// Default rendering of a raw value: its display text, or `Empty` for null.
    pub fn from_value(value: &Value) -> Self {
        if value.is_null() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// Returns the text shown by this cell.
    pub fn as_text(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Text(text) => text,
            Cell::Badge { label, .. } => label,
        }
    }
}

/// Capability to turn one field of a row into a [`Cell`].
///
/// Closures of the form `Fn(&Value, &R) -> Cell` implement this trait.
pub trait CellRenderer<R>: Send + Sync {
    /// Renders `value`, the column's field of `record`.
    fn render(&self, value: &Value, record: &R) -> Cell;
}

impl<R, F> CellRenderer<R> for F
where
    F: Fn(&Value, &R) -> Cell + Send + Sync,
{
    fn render(&self, value: &Value, record: &R) -> Cell {
        self(value, record)
    }
}

/// Column configuration.
///
/// Columns define the structure of the table: which field is shown, its
/// header label, alignment, whether it can be sorted and how its cells
/// render.
///
/// # Examples
///
/// ```
/// use quote_table::model::Record;
/// use quote_table::table::{Alignment, Cell, Column};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("id", "ID"),
///     Column::new("lodge", "Lodge").sortable(),
///     Column::new("total", "Total")
///         .sortable()
///         .align(Alignment::Right)
///         .render(|value, _record| Cell::text(format!("${value}"))),
/// ];
/// ```
pub struct Column<R: TableRecord> {
    /// Field shown in this column
    pub key: R::Key,
    /// Column header text
    pub label: String,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Horizontal alignment
    pub align: Alignment,
    renderer: Option<Arc<dyn CellRenderer<R>>>,
}

impl<R: TableRecord> Column<R> {
    /// Create a new, non-sortable column.
    pub fn new(key: impl Into<R::Key>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            align: Alignment::Left,
            renderer: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render cells with a closure.
    pub fn render<F>(self, render: F) -> Self
    where
        F: Fn(&Value, &R) -> Cell + Send + Sync + 'static,
    {
        self.renderer(render)
    }

    /// Render cells with a shared renderer.
    pub fn renderer(mut self, renderer: impl CellRenderer<R> + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Returns `true` if a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Renders this column's cell for `record`.
    pub fn render_cell(&self, record: &R) -> Cell {
        let value = record.value(&self.key);
        match &self.renderer {
            Some(renderer) => renderer.render(&value, record),
            None => Cell::from_value(&value),
        }
    }
}

impl<R: TableRecord> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            align: self.align,
            renderer: self.renderer.clone(),
        }
    }
}

impl<R: TableRecord> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
