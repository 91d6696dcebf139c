// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collision-free local names for generated method bodies.
//!
//! Generated bindings use call-site hygiene, so every local introduced by a
//! routine must differ from every other local in the same body. The
//! allocator hands out names in a fixed order:
//!
//! 1. reserved names (`cursor`, `values`, prelude variants)
//! 2. one binding per property, in declaration order
//! 3. one binding per distinct adapter
//! 4. routine-local helpers (`*_column_index`, `*_values`), allocated from a
//!    clone so the read and write bodies do not see each other's helpers
//!
//! A suggestion that is a keyword gets a trailing `_`. A suggestion already
//! taken gets `_2`, `_3`, ... appended.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{Ident, ext::IdentExt};

use super::parse::Property;

/// Parameter name of the read routine.
pub const CURSOR: &str = "cursor";

/// Local holding the map built by the write routine.
pub const VALUES: &str = "values";

// Names generated code refers to unqualified.
const RESERVED: [&str; 7] = [CURSOR, VALUES, "index", "Some", "None", "Ok", "Err"];

// https://doc.rust-lang.org/reference/keywords.html
const KEYWORDS: [&str; 52] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield"
];

/// Check if `word` cannot be used as a plain identifier.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word) || word == "_"
}

/// Allocates unique identifiers within one generated body.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    taken: HashSet<String>
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    /// Allocator with the reserved names already taken.
    #[must_use]
    pub fn new() -> Self {
        Self {
            taken: RESERVED.iter().map(|name| (*name).to_owned()).collect()
        }
    }

    /// Allocate a fresh name derived from `suggestion`.
    pub fn allocate(&mut self, suggestion: &str) -> Ident {
        let mut base = sanitize(suggestion);
        if is_keyword(&base) {
            base.push('_');
        }
        let mut candidate = base.clone();
        let mut counter = 2_usize;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}_{counter}");
            counter += 1;
        }
        self.taken.insert(candidate.clone());
        Ident::new(&candidate, Span::call_site())
    }
}

/// Allocate one binding per property, in declaration order.
pub fn bind_properties(properties: &[Property], names: &mut NameAllocator) -> Vec<Ident> {
    properties
        .iter()
        .map(|property| names.allocate(&property.ident().unraw().to_string()))
        .collect()
}

/// Map arbitrary text onto identifier characters.
fn sanitize(suggestion: &str) -> String {
    let mut name: String = suggestion
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    name
}
