// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{Cursor, CursorError, MemoryCursor, Value};
use cursor_derive::CursorValue;

#[derive(Debug)]
pub enum DbError {
    Cursor(CursorError),
}

impl From<CursorError> for DbError {
    fn from(err: CursorError) -> Self {
        Self::Cursor(err)
    }
}

#[derive(CursorValue)]
#[cursor(read, mapper = "row_mapper", error = "DbError")]
pub struct Note {
    pub id: i64,
    pub body: String,
}

fn collect<C: Cursor>(cursor: &C, map: fn(&C) -> Result<Note, DbError>) -> Vec<Note> {
    map(cursor).into_iter().collect()
}

fn main() {
    let mut cursor = MemoryCursor::new(["id", "body"]);
    cursor
        .add_row(vec![Value::Integer(1), Value::Text("first".to_string())])
        .unwrap();
    assert!(cursor.move_to_first());

    let notes = collect(&cursor, Note::row_mapper::<MemoryCursor>());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].body, "first");

    let empty = MemoryCursor::new(["body"]);
    assert!(matches!(
        Note::from_cursor(&empty),
        Err(DbError::Cursor(CursorError::MissingColumn(_)))
    ));
}
