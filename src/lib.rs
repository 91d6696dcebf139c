//! # cursor-derive
//!
//! Derive row mappings between database cursors and column/value maps.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cursor_derive::CursorValue;
//!
//! #[derive(CursorValue)]
//! pub struct User {
//!     pub id: i64,
//!
//!     #[cursor(column = "display_name")]
//!     pub name: String,
//!
//!     pub email: Option<String>,
//!
//!     #[cursor(adapter = "TimestampAdapter")]
//!     pub created_at: Timestamp,
//! }
//!
//! let user = User::from_cursor(&cursor)?;
//! let values = user.to_values();
//! ```
//!
//! Generates: `User::from_cursor` (cursor → struct) and `User::to_values`
//! (struct → [`ContentValues`](https://docs.rs/cursor-core)), plus an optional
//! `fn` pointer mapper.

#![warn(clippy::all)]
#![deny(unsafe_code)]

mod cursor;
mod utils;

use proc_macro::TokenStream;

/// Derive cursor reads and values writes for a struct with named fields.
///
/// # Container attributes
///
/// | Attribute | Default | Effect |
/// |-----------|---------|--------|
/// | `read` / `read = "name"` | `from_cursor` | Generate the cursor → struct routine |
/// | `write` / `write = "name"` | `to_values` | Generate the struct → values routine |
/// | `mapper` / `mapper = "name"` | off | `fn` pointer to the read routine; needs `read` |
/// | `krate = "path"` | `::cursor_core` | Runtime crate path |
/// | `values = "Type"` | `ContentValues` | Map type returned by the write routine |
/// | `error = "Type"` | `CursorError` | Error type of the read routine; must implement `From<CursorError>` |
///
/// Without `read` and `write` both routines are generated.
///
/// # Field attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `column = "name"` | Column to use instead of the field name |
/// | `adapter = "Type"` | Convert through a `Default + ColumnTypeAdapter<T>` |
/// | `values_with = "path"` | Write through `fn(&T) -> Option<Values>` |
///
/// # Native types
///
/// `String`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`, `Vec<u8>`,
/// `Box<[u8]>`, and `Option` of any of them. An `Option` property reads
/// `None` when its column is missing or `NULL`.
#[proc_macro_derive(CursorValue, attributes(cursor))]
pub fn derive_cursor_value(input: TokenStream) -> TokenStream {
    cursor::derive(input)
}
