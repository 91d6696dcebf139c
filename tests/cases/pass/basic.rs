// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{ContentValues, MemoryCursor, Value};
use cursor_derive::CursorValue;

#[derive(CursorValue, Debug, PartialEq)]
pub struct User {
    pub id: i64,

    #[cursor(column = "display_name")]
    pub name: String,

    pub age: i32,
    pub rank: i16,
    pub score: f64,
    pub ratio: f32,
    pub active: bool,
    pub avatar: Vec<u8>,
    pub thumbnail: Box<[u8]>,
}

fn main() {
    let user = User {
        id: 1,
        name: "Ada".to_string(),
        age: 36,
        rank: 2,
        score: 9.5,
        ratio: 0.5,
        active: true,
        avatar: vec![1, 2, 3],
        thumbnail: vec![4].into_boxed_slice(),
    };

    let values: ContentValues = user.to_values();
    assert_eq!(values.len(), 9);
    assert_eq!(values.get("display_name"), Some(&Value::Text("Ada".to_string())));
    assert_eq!(values.get("active"), Some(&Value::Integer(1)));

    let cursor = MemoryCursor::from_values(values);
    let read = User::from_cursor(&cursor).unwrap();
    assert_eq!(read, user);
}
