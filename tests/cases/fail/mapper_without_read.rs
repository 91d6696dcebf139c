// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

#[derive(CursorValue)]
#[cursor(write, mapper)]
pub struct Row {
    pub id: i64,
}

fn main() {}
