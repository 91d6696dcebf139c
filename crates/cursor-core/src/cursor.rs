// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The row-store interface generated code reads from.

use crate::{CursorError, Result};

/// Read access to the current row of a query result.
///
/// Generated `from_cursor` routines call these methods through fully
/// qualified paths, so the trait does not need to be in scope at the derive
/// site.
///
/// Column lookups come in two flavours:
///
/// - [`require_column_index`](Cursor::require_column_index) fails with
///   [`CursorError::MissingColumn`]; used for non-nullable properties.
/// - [`column_index`](Cursor::column_index) returns `None`; used for nullable
///   properties, where a missing column reads as `None` like a `NULL` cell.
pub trait Cursor {
    /// Index of `column`, or `None` if the result set has no such column.
    fn column_index(&self, column: &str) -> Option<usize>;

    /// Index of `column`, failing if the result set has no such column.
    fn require_column_index(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| CursorError::MissingColumn(column.to_owned()))
    }

    /// Number of columns in the result set.
    fn column_count(&self) -> usize;

    /// Check whether the cell at `index` is `NULL`.
    fn is_null(&self, index: usize) -> Result<bool>;

    /// Read a text cell.
    fn get_string(&self, index: usize) -> Result<String>;

    /// Read a 32-bit integer cell.
    fn get_int(&self, index: usize) -> Result<i32>;

    /// Read a 64-bit integer cell.
    fn get_long(&self, index: usize) -> Result<i64>;

    /// Read a 16-bit integer cell.
    fn get_short(&self, index: usize) -> Result<i16>;

    /// Read a single precision float cell.
    fn get_float(&self, index: usize) -> Result<f32>;

    /// Read a double precision float cell.
    fn get_double(&self, index: usize) -> Result<f64>;

    /// Read a blob cell.
    fn get_blob(&self, index: usize) -> Result<Vec<u8>>;
}
