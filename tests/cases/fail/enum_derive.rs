// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_derive::CursorValue;

#[derive(CursorValue)]
pub enum Status {
    Active,
    Inactive,
}

fn main() {}
