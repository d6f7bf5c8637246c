//! Row selection for bulk actions.
//!
//! Selection is keyed by [`RecordId`] so it stays stable while rows are
//! re-sorted or re-filtered.

use std::collections::HashSet;

use crate::model::RecordId;

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<RecordId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    /// Check if every ID in `ids` is selected. False for an empty list.
    pub fn contains_all(&self, ids: &[RecordId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggle selection of an ID.
    /// Returns `true` if the ID is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replace the selection with exactly `ids`.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.selected.clear();
        self.selected.extend(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(RecordId::from(3)));
        assert!(selection.is_selected(&RecordId::from(3)));
        assert!(!selection.toggle(RecordId::from(3)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selected_is_sorted() {
        let mut selection = Selection::new();
        selection.replace([RecordId::from("b"), RecordId::from(9), RecordId::from(2), RecordId::from("a")]);
        assert_eq!(
            selection.selected(),
            vec![RecordId::from(2), RecordId::from(9), RecordId::from("a"), RecordId::from("b")]
        );
    }

    #[test]
    fn test_replace_and_contains_all() {
        let mut selection = Selection::new();
        selection.toggle(RecordId::from(1));
        selection.replace([RecordId::from(2), RecordId::from(3)]);

        assert!(!selection.is_selected(&RecordId::from(1)));
        assert!(selection.contains_all(&[RecordId::from(2), RecordId::from(3)]));
        assert!(!selection.contains_all(&[]));
        assert_eq!(selection.len(), 2);
        selection.clear();
        assert!(selection.is_empty());
    }
}
