// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

pub struct Foo;

#[derive(CursorValue)]
pub struct Row {
    #[cursor(adapter = "&'static Foo")]
    pub foo: Foo,
}

fn main() {}
