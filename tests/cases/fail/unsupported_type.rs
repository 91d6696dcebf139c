// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

#[derive(CursorValue)]
pub struct Row {
    pub tags: Vec<i32>,
}

fn main() {}
