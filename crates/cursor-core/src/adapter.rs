// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! User-supplied column conversions.

use crate::{Cursor, Result, Values};

/// Converts a property type the cursor cannot read natively.
///
/// Attach an adapter to a field with `#[cursor(adapter = "MyAdapter")]`. The
/// adapter must also implement [`Default`]; generated code creates one
/// instance per routine and shares it between every field that names it.
///
/// # Example
///
/// ```rust
/// use cursor_core::{ColumnTypeAdapter, Cursor, Result, Value, Values};
///
/// pub struct Point {
///     pub x: i32,
///     pub y: i32
/// }
///
/// #[derive(Default)]
/// pub struct PointAdapter;
///
/// impl ColumnTypeAdapter<Point> for PointAdapter {
///     fn from_cursor<C: Cursor + ?Sized>(&self, cursor: &C, column: &str) -> Result<Point> {
///         let text = cursor.get_string(cursor.require_column_index(column)?)?;
///         let (x, y) = text.split_once(',').unwrap_or(("0", "0"));
///         Ok(Point {
///             x: x.parse().unwrap_or_default(),
///             y: y.parse().unwrap_or_default()
///         })
///     }
///
///     fn to_values<V: Values>(&self, values: &mut V, column: &str, value: &Point) {
///         values.put(column, Value::from(format!("{},{}", value.x, value.y)));
///     }
/// }
/// ```
pub trait ColumnTypeAdapter<T> {
    /// Read a `T` from `column` of the cursor's current row.
    fn from_cursor<C: Cursor + ?Sized>(&self, cursor: &C, column: &str) -> Result<T>;

    /// Write `value` into `values` under `column`.
    fn to_values<V: Values>(&self, values: &mut V, column: &str, value: &T);
}
