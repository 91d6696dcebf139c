// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime traits and types for cursor-derive.
//!
//! Code generated by `#[derive(CursorValue)]` compiles against this crate. It
//! can also be used on its own to write row mappings by hand.
//!
//! # Overview
//!
//! - [`Cursor`] - Read access to the current row of a result set
//! - [`Values`] / [`ContentValues`] - Column/value maps for insert and update
//! - [`Value`] - A single storage cell
//! - [`ColumnTypeAdapter`] - User conversions for non-native property types
//! - [`MemoryCursor`] - In-memory cursor, handy in tests
//! - [`CursorError`] - Errors raised by cursor reads
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use cursor_core::prelude::*;
//!
//! let mut values = ContentValues::new();
//! values.put("id", 7_i64);
//! values.put("name", "Grace");
//!
//! let cursor = MemoryCursor::from_values(values);
//! let id = cursor.get_long(cursor.require_column_index("id")?)?;
//! assert_eq!(id, 7);
//! # Ok::<(), CursorError>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Value`] and [`ContentValues`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adapter;
mod cursor;
mod error;
mod memory;
mod value;
mod values;

pub mod prelude;

pub use adapter::ColumnTypeAdapter;
pub use cursor::Cursor;
pub use error::{CursorError, Result};
pub use memory::MemoryCursor;
pub use value::Value;
pub use values::{ContentValues, Values};
