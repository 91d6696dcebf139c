// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(CursorValue)]`.
//!
//! ```text
//! parse.rs (coordinator)
//! ├── value.rs     - container attributes, ValueDef
//! ├── property.rs  - field attributes, Property
//! └── routines.rs  - generated routine names
//! ```

mod property;
mod routines;
mod value;

pub use property::Property;
pub use routines::{Routine, Routines};
pub use value::ValueDef;
