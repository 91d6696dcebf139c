// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::MemoryCursor;
use cursor_derive::CursorValue;

#[derive(CursorValue)]
pub struct Marker {}

fn main() {
    assert!(Marker {}.to_values().is_empty());
    let cursor = MemoryCursor::new(Vec::<String>::new());
    assert!(Marker::from_cursor(&cursor).is_ok());
}
