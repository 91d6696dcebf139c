// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use cursor_core::prelude::*;
//! ```

pub use crate::{
    ColumnTypeAdapter, ContentValues, Cursor, CursorError, MemoryCursor, Value, Values
};
