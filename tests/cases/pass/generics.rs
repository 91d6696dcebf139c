// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use cursor_core::{ColumnTypeAdapter, Cursor, MemoryCursor, Result, Values};
use cursor_derive::CursorValue;

#[derive(Default)]
pub struct Marker;

impl<T> ColumnTypeAdapter<PhantomData<T>> for Marker {
    fn from_cursor<C: Cursor + ?Sized>(&self, _cursor: &C, _column: &str) -> Result<PhantomData<T>> {
        Ok(PhantomData)
    }

    fn to_values<V: Values>(&self, _values: &mut V, _column: &str, _value: &PhantomData<T>) {}
}

#[derive(CursorValue)]
pub(crate) struct Tagged<C> {
    pub id: i32,

    #[cursor(adapter = "Marker")]
    pub kind: PhantomData<C>,
}

fn main() {
    let tagged = Tagged::<u8> {
        id: 3,
        kind: PhantomData,
    };
    let cursor = MemoryCursor::from_values(tagged.to_values());
    let read = Tagged::<u8>::from_cursor(&cursor).unwrap();
    assert_eq!(read.id, 3);
}
