// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

pub struct Foo;

#[derive(Default)]
pub struct NotAnAdapter;

#[derive(CursorValue)]
#[cursor(read)]
pub struct Row {
    #[cursor(adapter = "NotAnAdapter")]
    pub foo: Foo,
}

fn main() {}
