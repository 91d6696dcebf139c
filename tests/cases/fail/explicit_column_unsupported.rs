// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

#[derive(CursorValue)]
#[cursor(read)]
pub struct Row {
    #[cursor(column = "column_i")]
    pub a: Option<Vec<i32>>,
}

fn main() {}
