// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`Cursor`] over rows of [`Value`]s.
//!
//! Useful in tests and for feeding a [`ContentValues`] map straight back into
//! a generated `from_cursor` routine.
//!
//! # Conversions
//!
//! Getters accept a few cross-class reads the way SQLite does:
//!
//! | Getter | Accepts |
//! |--------|---------|
//! | `get_string` | text, integer, real |
//! | `get_long`, `get_int`, `get_short` | integer in range, numeric text |
//! | `get_double`, `get_float` | real, integer, numeric text |
//! | `get_blob` | blob, text (UTF-8 bytes) |
//!
//! Every getter fails with [`CursorError::UnexpectedNull`] on a `NULL` cell.

use tracing::{debug, trace};

use crate::{ContentValues, Cursor, CursorError, Result, Value};

/// Where a [`MemoryCursor`] stands relative to its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    #[default]
    BeforeFirst,
    At(usize),
    AfterLast
}

/// A cursor backed by owned rows.
///
/// A fresh cursor is positioned before the first row; call
/// [`move_to_first`](MemoryCursor::move_to_first) before reading.
///
/// # Example
///
/// ```rust
/// use cursor_core::{Cursor, MemoryCursor, Value};
///
/// let mut cursor = MemoryCursor::new(["id", "name"]);
/// cursor.add_row(vec![Value::from(1), Value::from("Ada")]).unwrap();
///
/// assert!(cursor.move_to_first());
/// let index = cursor.require_column_index("name").unwrap();
/// assert_eq!(cursor.get_string(index).unwrap(), "Ada");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns:  Vec<String>,
    rows:     Vec<Vec<Value>>,
    position: Position
}

impl MemoryCursor {
    /// Create an empty cursor with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            columns:  columns.into_iter().map(Into::into).collect(),
            rows:     Vec::new(),
            position: Position::BeforeFirst
        }
    }

    /// Single-row cursor holding the entries of `values`, already positioned
    /// on that row.
    #[must_use]
    pub fn from_values(values: ContentValues) -> Self {
        let (columns, row): (Vec<String>, Vec<Value>) = values.into_iter().unzip();
        Self {
            columns,
            rows: vec![row],
            position: Position::At(0)
        }
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// [`CursorError::RowWidth`] if the row does not have one cell per
    /// column.
    pub fn add_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(CursorError::RowWidth {
                expected: self.columns.len(),
                found:    row.len()
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Current row index, `None` when not on a row.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self.position {
            Position::At(position) => Some(position),
            Position::BeforeFirst | Position::AfterLast => None
        }
    }

    /// Check if the cursor has not been moved onto a row yet.
    #[must_use]
    pub const fn is_before_first(&self) -> bool {
        matches!(self.position, Position::BeforeFirst)
    }

    /// Check if the cursor has moved past the last row.
    #[must_use]
    pub const fn is_after_last(&self) -> bool {
        matches!(self.position, Position::AfterLast)
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Move to the first row. Returns `false` if the cursor is empty.
    pub fn move_to_first(&mut self) -> bool {
        self.move_to_position(0)
    }

    /// Advance one row. Returns `false` once past the last row, and keeps
    /// returning `false` until the cursor is repositioned.
    pub fn move_to_next(&mut self) -> bool {
        match self.position {
            Position::BeforeFirst => self.move_to_position(0),
            Position::At(position) => self.move_to_position(position + 1),
            Position::AfterLast => false
        }
    }

    /// Move to `position`. Returns `false` and leaves the cursor after the
    /// last row if `position` is out of range.
    pub fn move_to_position(&mut self, position: usize) -> bool {
        if position < self.rows.len() {
            trace!(position, "cursor moved");
            self.position = Position::At(position);
            true
        } else {
            trace!(position, rows = self.rows.len(), "cursor moved past last row");
            self.position = Position::AfterLast;
            false
        }
    }

    fn cell(&self, index: usize) -> Result<&Value> {
        let row = self
            .position()
            .and_then(|position| self.rows.get(position))
            .ok_or(CursorError::NoCurrentRow)?;
        row.get(index).ok_or(CursorError::IndexOutOfBounds {
            index,
            count: row.len()
        })
    }

    fn non_null(&self, index: usize) -> Result<&Value> {
        match self.cell(index)? {
            Value::Null => Err(CursorError::UnexpectedNull {
                index
            }),
            value => Ok(value)
        }
    }
}

fn mismatch(index: usize, expected: &'static str, found: &Value) -> CursorError {
    debug!(index, expected, found = found.type_name(), "cell conversion failed");
    CursorError::TypeMismatch {
        index,
        expected,
        found: found.type_name()
    }
}

impl Cursor for MemoryCursor {
    fn column_index(&self, column: &str) -> Option<usize> {
        let index = self.columns.iter().position(|name| name == column);
        if index.is_none() {
            debug!(column, "column not found");
        }
        index
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn is_null(&self, index: usize) -> Result<bool> {
        Ok(self.cell(index)?.is_null())
    }

    fn get_string(&self, index: usize) -> Result<String> {
        match self.non_null(index)? {
            Value::Text(text) => Ok(text.clone()),
            Value::Integer(value) => Ok(value.to_string()),
            Value::Real(value) => Ok(value.to_string()),
            other => Err(mismatch(index, "text", other))
        }
    }

    fn get_int(&self, index: usize) -> Result<i32> {
        let value = self.get_long(index)?;
        i32::try_from(value).map_err(|_| mismatch(index, "i32", &Value::Integer(value)))
    }

    fn get_long(&self, index: usize) -> Result<i64> {
        let cell = self.non_null(index)?;
        match cell {
            Value::Integer(value) => Ok(*value),
            Value::Text(raw) => raw.trim().parse().map_err(|_| mismatch(index, "integer", cell)),
            other => Err(mismatch(index, "integer", other))
        }
    }

    fn get_short(&self, index: usize) -> Result<i16> {
        let value = self.get_long(index)?;
        i16::try_from(value).map_err(|_| mismatch(index, "i16", &Value::Integer(value)))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn get_float(&self, index: usize) -> Result<f32> {
        self.get_double(index).map(|value| value as f32)
    }

    #[allow(clippy::cast_precision_loss)]
    fn get_double(&self, index: usize) -> Result<f64> {
        let cell = self.non_null(index)?;
        match cell {
            Value::Real(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            Value::Text(raw) => raw.trim().parse().map_err(|_| mismatch(index, "real", cell)),
            other => Err(mismatch(index, "real", other))
        }
    }

    fn get_blob(&self, index: usize) -> Result<Vec<u8>> {
        match self.non_null(index)? {
            Value::Blob(bytes) => Ok(bytes.clone()),
            Value::Text(text) => Ok(text.as_bytes().to_vec()),
            other => Err(mismatch(index, "blob", other))
        }
    }
}
