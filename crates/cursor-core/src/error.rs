// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for cursor reads.

use thiserror::Error;

/// Errors raised while reading cells out of a [`Cursor`](crate::Cursor).
///
/// Generated `from_cursor` routines propagate these with `?`, so a custom
/// error type configured with `#[cursor(error = "...")]` must implement
/// `From<CursorError>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CursorError {
    /// No column with this name exists in the result set.
    #[error("column `{0}` does not exist")]
    MissingColumn(String),

    /// A column index past the end of the row.
    #[error("column index {index} is out of bounds for {count} columns")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of columns in the row.
        count: usize
    },

    /// A non-nullable getter hit a `NULL` cell.
    #[error("column {index} is null")]
    UnexpectedNull {
        /// Index of the null cell.
        index: usize
    },

    /// The cell holds a value the getter cannot convert.
    #[error("column {index} holds {found}, expected {expected}")]
    TypeMismatch {
        /// Index of the offending cell.
        index:    usize,
        /// What the getter asked for.
        expected: &'static str,
        /// What the cell contains.
        found:    &'static str
    },

    /// A row was added with the wrong number of cells.
    #[error("row has {found} cells, cursor has {expected} columns")]
    RowWidth {
        /// Number of columns declared by the cursor.
        expected: usize,
        /// Number of cells in the rejected row.
        found:    usize
    },

    /// The cursor is before the first or after the last row.
    #[error("cursor is not positioned on a row")]
    NoCurrentRow
}

/// Result alias for cursor reads.
pub type Result<T> = std::result::Result<T, CursorError>;
