//! Table options and bulk action descriptors.

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Rows per page when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Visual weight of a bulk action button or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Secondary,
    Destructive,
    Outline,
    /// Also used for names this crate does not know.
    #[default]
    #[serde(other)]
    Default,
}

impl From<&str> for Variant {
    /// Unknown names fall back to [`Variant::Default`].
    fn from(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "secondary" => Variant::Secondary,
            "destructive" => Variant::Destructive,
            "outline" => Variant::Outline,
            _ => Variant::Default,
        }
    }
}

/// An action that can be applied to every selected row at once.
///
/// # Example
///
/// ```
/// use quote_table::table::{BulkAction, Variant};
///
/// let delete = BulkAction::new("Delete", "delete").variant(Variant::Destructive);
/// assert_eq!(delete.value, "delete");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    /// Text shown to the user.
    pub label: String,
    /// Value passed to the bulk handler.
    pub value: String,
    /// Visual weight.
    #[serde(default)]
    pub variant: Variant,
}

impl BulkAction {
    /// Creates a bulk action with the default variant.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            variant: Variant::Default,
        }
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// Options for one [`TableEngine`](super::TableEngine).
///
/// Options can be built in code or loaded from JSON with camelCase keys:
///
/// ```
/// use quote_table::table::TableOptions;
///
/// let options: TableOptions = TableOptions::from_json(r#"{
///     "searchFields": ["guest", "lodge"],
///     "itemsPerPage": 25,
///     "bulkActions": [{ "label": "Archive", "value": "archive", "variant": "secondary" }]
/// }"#).unwrap();
///
/// assert_eq!(options.items_per_page, 25);
/// assert!(options.search_query.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions<K = String> {
    /// Free-text query; empty means no filtering.
    pub search_query: String,
    /// Fields searched by the query; empty means every field.
    pub search_fields: Vec<K>,
    /// Rows per page.
    pub items_per_page: usize,
    /// Actions offered for selected rows.
    pub bulk_actions: Vec<BulkAction>,
}

impl<K> Default for TableOptions<K> {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            search_fields: Vec::new(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            bulk_actions: Vec::new(),
        }
    }
}

impl<K> TableOptions<K> {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Sets the fields the query is matched against.
    pub fn search_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of rows per page.
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Adds a bulk action.
    pub fn bulk_action(mut self, action: BulkAction) -> Self {
        self.bulk_actions.push(action);
        self
    }

    /// Checks that the options are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == 0 {
            return Err(ConfigError::invalid("itemsPerPage", "must be at least 1"));
        }
        if let Some(action) = self.bulk_actions.iter().find(|a| a.value.is_empty()) {
            return Err(ConfigError::invalid(
                "bulkActions",
                format!("action '{}' has an empty value", action.label),
            ));
        }
        Ok(())
    }
}

impl<K: DeserializeOwned> TableOptions<K> {
    /// Parses and validates options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
