// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column/value maps for insert and update.
//!
//! [`Values`] is the write target of generated `to_values` routines.
//! [`ContentValues`] is the stock implementation: an insertion-ordered map
//! from column name to [`Value`] where a second `put` for the same column
//! replaces the first.

use std::slice;

use crate::Value;

/// A write target mapping column names to cell values.
///
/// Generated code only writes through `with_capacity`, `put` and `put_all`,
/// so any map type can be plugged in with `#[cursor(values = "path::to::Map")]`.
pub trait Values {
    /// Create an empty map sized for `capacity` columns.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Store `value` under `column`, replacing any previous value.
    fn put(&mut self, column: &str, value: Value);

    /// Merge every entry of `other` into `self`.
    fn put_all(&mut self, other: Self)
    where
        Self: Sized;

    /// Value stored for `column`.
    fn get(&self, column: &str) -> Option<&Value>;
}

/// Insertion-ordered column/value map.
///
/// # Example
///
/// ```rust
/// use cursor_core::{ContentValues, Value};
///
/// let mut values = ContentValues::new();
/// values.put("name", "Ada");
/// values.put("age", 36);
///
/// assert_eq!(values.get("age"), Some(&Value::Integer(36)));
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentValues {
    entries: Vec<(String, Value)>
}

impl ContentValues {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new()
        }
    }

    /// Create an empty map with room for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity)
        }
    }

    /// Store a value, replacing any previous value for the column.
    pub fn put(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((column, value))
        }
    }

    /// Merge all entries of `other`, later values winning.
    pub fn put_all(&mut self, other: ContentValues) {
        for (column, value) in other.entries {
            self.put(column, value);
        }
    }

    /// Value stored for `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Check whether `column` has an entry (possibly `NULL`).
    #[must_use]
    pub fn contains_key(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Remove and return the entry for `column`.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(name, _)| name == column)?;
        Some(self.entries.remove(position).1)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }
}

impl Values for ContentValues {
    fn with_capacity(capacity: usize) -> Self {
        ContentValues::with_capacity(capacity)
    }

    fn put(&mut self, column: &str, value: Value) {
        ContentValues::put(self, column, value);
    }

    fn put_all(&mut self, other: Self) {
        ContentValues::put_all(self, other);
    }

    fn get(&self, column: &str) -> Option<&Value> {
        ContentValues::get(self, column)
    }
}

impl IntoIterator for ContentValues {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContentValues {
    type Item = &'a (String, Value);
    type IntoIter = slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ContentValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ContentValues::new();
        for (column, value) in iter {
            values.put(column, value);
        }
        values
    }
}
