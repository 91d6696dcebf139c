// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{MemoryCursor, Value};
use cursor_derive::CursorValue;

#[derive(CursorValue)]
pub struct Odd {
    pub r#type: String,
    pub cursor: i32,
    pub values: i64,
    pub index: Option<i32>,
    pub index_column_index: bool,
}

fn main() {
    let odd = Odd {
        r#type: "x".to_string(),
        cursor: 1,
        values: 2,
        index: Some(3),
        index_column_index: true,
    };
    let values = odd.to_values();
    assert_eq!(values.get("type"), Some(&Value::Text("x".to_string())));

    let cursor = MemoryCursor::from_values(values);
    let read = Odd::from_cursor(&cursor).unwrap();
    assert_eq!(read.r#type, "x");
    assert_eq!(read.cursor, 1);
    assert_eq!(read.values, 2);
    assert_eq!(read.index, Some(3));
    assert!(read.index_column_index);
}
