// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{ColumnTypeAdapter, Cursor, MemoryCursor, Result, Value, Values};
use cursor_derive::CursorValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Millis(u64);

#[derive(Default)]
pub struct MillisAdapter;

impl ColumnTypeAdapter<Millis> for MillisAdapter {
    fn from_cursor<C: Cursor + ?Sized>(&self, cursor: &C, column: &str) -> Result<Millis> {
        let raw = cursor.get_long(cursor.require_column_index(column)?)?;
        Ok(Millis(raw.unsigned_abs()))
    }

    fn to_values<V: Values>(&self, values: &mut V, column: &str, value: &Millis) {
        values.put(column, Value::Integer(value.0 as i64));
    }
}

#[derive(CursorValue)]
pub struct Event {
    pub name: String,

    #[cursor(adapter = "MillisAdapter")]
    pub started: Millis,

    #[cursor(adapter = "MillisAdapter", column = "finished_at")]
    pub finished: Millis,
}

fn main() {
    let event = Event {
        name: "deploy".to_string(),
        started: Millis(10),
        finished: Millis(25),
    };
    let values = event.to_values();
    assert_eq!(values.get("finished_at"), Some(&Value::Integer(25)));

    let cursor = MemoryCursor::from_values(values);
    let read = Event::from_cursor(&cursor).unwrap();
    assert_eq!(read.started, Millis(10));
    assert_eq!(read.finished, Millis(25));
}
