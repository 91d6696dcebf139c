// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping failures reported by the engine.
//!
//! Every variant is attached to the offending property's span and
//! accumulated with the other errors of the same derive, so one compile run
//! reports all unmappable properties at once.

use thiserror::Error;

use super::parse::Routine;

/// A property the generators cannot map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// No catalog entry, no adapter, and no nullable fallback.
    #[error(
        "property `{property}` has type `{ty}` that can't be {routine}; \
         add #[cursor(adapter = \"...\")] with a ColumnTypeAdapter for it"
    )]
    UnsupportedType {
        property: String,
        ty:       String,
        routine:  Routine
    },

    /// An unreadable type with an explicit column name.
    #[error(
        "property `{property}` maps column \"{column}\" but has type `{ty}` that can't be read \
         from a cursor"
    )]
    UnsupportedTypeWithExplicitColumn {
        property: String,
        ty:       String,
        column:   String
    },

    /// The adapter type does not offer what the generated routines call.
    #[error("adapter `{adapter}` on property `{property}` {missing}; expected {expected}")]
    AdapterContractViolation {
        adapter:  String,
        property: String,
        missing:  String,
        expected: String
    }
}
