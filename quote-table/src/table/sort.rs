//! Sort state and row ordering.

use std::cmp::Ordering;

use crate::model::TableRecord;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// The active sort of a table: one field and a direction.
///
/// # Example
///
/// ```
/// use quote_table::table::{Direction, Sort};
///
/// let sort = Sort::asc("arrival".to_string());
/// let sort = sort.toggle("arrival".to_string());
/// assert_eq!(sort.direction, Direction::Desc);
///
/// let sort = sort.toggle("lodge".to_string());
/// assert_eq!(sort, Sort::asc("lodge".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort<K> {
    /// Field being sorted on.
    pub key: K,
    /// Sort direction.
    pub direction: Direction,
}

impl<K: PartialEq> Sort<K> {
    /// Creates an ascending sort on a field.
    pub fn asc(key: K) -> Self {
        Self {
            key,
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(key: K) -> Self {
        Self {
            key,
            direction: Direction::Desc,
        }
    }

    /// Sort after a header click on `key`: the same key flips direction, a
    /// new key starts ascending.
    pub fn toggle(self, key: K) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self::asc(key)
        }
    }
}

/// Resolves a sort request against the current sort state.
pub fn next_sort<K: PartialEq>(current: Option<Sort<K>>, key: K) -> Sort<K> {
    match current {
        Some(sort) => sort.toggle(key),
        None => Sort::asc(key),
    }
}

/// Compares two rows on the sort key.
///
/// Rows are compared on their raw field values with
/// [`Value::sort_cmp`](crate::model::Value::sort_cmp); the direction reverses
/// the comparator.
pub fn compare_rows<R: TableRecord>(a: &R, b: &R, sort: &Sort<R::Key>) -> Ordering {
    let left = a.value(&sort.key);
    let right = b.value(&sort.key);
    sort.direction.apply(left.sort_cmp(&right))
}

/// Sorts rows in place. The sort is stable: rows with equal keys keep their
/// relative order in both directions.
pub fn sort_rows<R: TableRecord>(rows: &mut [&R], sort: &Sort<R::Key>) {
    rows.sort_by(|a, b| compare_rows(*a, *b, sort));
}
