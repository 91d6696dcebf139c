// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Which routines to generate and what to call them.
//!
//! | Attribute | Generated | Default name |
//! |-----------|-----------|--------------|
//! | `read` / `read = "name"` | cursor → struct | `from_cursor` |
//! | `write` / `write = "name"` | struct → values | `to_values` |
//! | `mapper` / `mapper = "name"` | `fn() -> fn(&C) -> Result<Self, E>` | `mapper` |
//!
//! With neither `read` nor `write` present, both are generated. The mapper
//! hands out the read routine as a function pointer, so it needs `read`.

use std::fmt;

use darling::util::Override;
use proc_macro2::Span;
use syn::Ident;

/// Direction of a generated routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    Read,
    Write
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read from a cursor"),
            Self::Write => f.write_str("put into values")
        }
    }
}

/// Resolved routine names; `None` means not generated.
#[derive(Debug, Clone)]
pub struct Routines {
    read:   Option<Ident>,
    write:  Option<Ident>,
    mapper: Option<Ident>
}

fn name(setting: Option<Override<Ident>>, default: &str) -> Option<Ident> {
    setting.map(|setting| match setting {
        Override::Inherit => Ident::new(default, Span::call_site()),
        Override::Explicit(ident) => ident
    })
}

impl Routines {
    /// Resolve routine settings from the container attribute.
    ///
    /// # Errors
    ///
    /// - `mapper` without a read routine
    /// - two routines sharing a name
    pub fn from_settings(
        read: Option<Override<Ident>>,
        write: Option<Override<Ident>>,
        mapper: Option<Override<Ident>>,
        target: &Ident
    ) -> darling::Result<Self> {
        let (read, write) = if read.is_none() && write.is_none() {
            (Some(Override::Inherit), Some(Override::Inherit))
        } else {
            (read, write)
        };
        let routines = Self {
            read:   name(read, "from_cursor"),
            write:  name(write, "to_values"),
            mapper: name(mapper, "mapper")
        };

        if routines.mapper.is_some() && routines.read.is_none() {
            return Err(darling::Error::custom(
                "`mapper` hands out the read routine; add `read` to #[cursor(...)]"
            )
            .with_span(target));
        }

        let names: Vec<&Ident> = [&routines.read, &routines.write, &routines.mapper]
            .into_iter()
            .flatten()
            .collect();
        for (position, ident) in names.iter().enumerate() {
            if names[..position].contains(ident) {
                return Err(darling::Error::custom(format!(
                    "two generated routines are both named `{ident}`"
                ))
                .with_span(*ident));
            }
        }

        Ok(routines)
    }

    #[must_use]
    pub fn read(&self) -> Option<&Ident> {
        self.read.as_ref()
    }

    #[must_use]
    pub fn write(&self) -> Option<&Ident> {
        self.write.as_ref()
    }

    #[must_use]
    pub fn mapper(&self) -> Option<&Ident> {
        self.mapper.as_ref()
    }

    /// Check whether `routine` is generated.
    #[must_use]
    pub fn generates(&self, routine: Routine) -> bool {
        match routine {
            Routine::Read => self.read.is_some(),
            Routine::Write => self.write.is_some()
        }
    }
}
