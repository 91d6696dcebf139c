// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{MemoryCursor, Value};
use cursor_derive::CursorValue;

#[derive(CursorValue)]
#[cursor(read)]
pub struct Profile {
    pub id: i64,

    #[cursor(column = "bio_text")]
    pub bio: Option<String>,

    pub verified: Option<bool>,

    pub tags: Option<Vec<i32>>,
}

fn main() {
    let mut cursor = MemoryCursor::new(["id", "bio_text"]);
    cursor.add_row(vec![Value::Integer(7), Value::Null]).unwrap();
    assert!(cursor.move_to_first());

    let profile = Profile::from_cursor(&cursor).unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(profile.bio, None);
    assert_eq!(profile.verified, None);
    assert_eq!(profile.tags, None);
}
