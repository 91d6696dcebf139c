// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CursorValue derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! cursor.rs (entry point)
//! ├── parse/        - ValueDef, Property, Routines (darling)
//! ├── catalog.rs    - native cell kinds and their getters
//! ├── names.rs      - collision-free local names
//! ├── adapter.rs    - adapter validation and deduplication
//! ├── read.rs       - cursor → struct statements
//! ├── write.rs      - struct → values statements
//! ├── stmt.rs       - statement model and lowering
//! ├── emit.rs       - impl block
//! └── error.rs      - MappingError
//! ```
//!
//! # Pipeline
//!
//! 1. Parse the container and every field; attribute errors are accumulated.
//! 2. Allocate one local per property, then one per distinct adapter.
//! 3. Validate adapters against the generated routines.
//! 4. Build the read and write statement sequences; mapping errors from both
//!    are accumulated together.
//! 5. Emit the `impl` block, or only the errors if anything failed.

mod adapter;
mod catalog;
mod emit;
mod error;
mod names;
mod parse;
mod read;
mod stmt;
mod write;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{DeriveInput, parse_macro_input};

use self::{
    adapter::TraitCapabilities,
    names::{NameAllocator, bind_properties},
    parse::ValueDef
};

/// Main entry point for the CursorValue derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ValueDef::from_derive_input(&input).and_then(|value| generate(&value)) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(value: &ValueDef) -> darling::Result<TokenStream2> {
    let mut names = NameAllocator::new();
    let bindings = bind_properties(value.properties(), &mut names);
    let adapters =
        adapter::resolve(value.properties(), &TraitCapabilities, value.routines(), &mut names)?;

    let mut errors = darling::Error::accumulator();
    let read = match value.routines().read() {
        Some(_) => errors.handle(read::generate_read(value, &bindings, &adapters, names.clone())),
        None => None
    };
    let write = match value.routines().write() {
        Some(_) => errors.handle(write::generate_write(value, &bindings, &adapters, names)),
        None => None
    };
    errors.finish()?;

    Ok(emit::generate(value, read.as_ref(), write.as_ref()))
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn expand(input: DeriveInput) -> darling::Result<String> {
        let value = ValueDef::from_derive_input(&input)?;
        generate(&value).map(|tokens| tokens.to_string())
    }

    #[test]
    fn generates_both_routines_by_default() {
        let output = expand(parse_quote! {
            pub struct Row {
                pub a: i32,
                pub b: String,
            }
        })
        .unwrap();
        assert!(output.contains("impl Row"));
        assert!(output.contains(
            "pub fn from_cursor < C : :: cursor_core :: Cursor + ? :: core :: marker :: Sized > \
             (cursor : & C) -> :: core :: result :: Result < Self , :: cursor_core :: CursorError >"
        ));
        assert!(output.contains("pub fn to_values (& self) -> :: cursor_core :: ContentValues"));
        assert!(!output.contains("fn mapper"));
    }

    #[test]
    fn read_only() {
        let output = expand(parse_quote! {
            #[cursor(read = "create")]
            struct Row {
                a: i32,
            }
        })
        .unwrap();
        assert!(output.contains("fn create <"));
        assert!(!output.contains("to_values"));
    }

    #[test]
    fn write_only_skips_read_errors() {
        let output = expand(parse_quote! {
            #[cursor(write)]
            struct Row {
                #[cursor(values_with = "encode")]
                tags: Vec<i32>,
            }
        })
        .unwrap();
        assert!(output.contains("fn to_values"));
        assert!(!output.contains("from_cursor"));
    }

    #[test]
    fn mapper_points_at_read_routine() {
        let output = expand(parse_quote! {
            #[cursor(read, mapper = "rows")]
            pub struct Row {
                pub a: i32,
            }
        })
        .unwrap();
        assert!(output.contains("pub fn rows < C"));
        assert!(output.contains("Self :: from_cursor :: < C >"));
    }

    #[test]
    fn generics_carried_through() {
        let output = expand(parse_quote! {
            struct Row<C: Clone> where C: Default {
                a: i32,
                #[cursor(adapter = "Passthrough")]
                extra: C,
            }
        })
        .unwrap();
        assert!(output.contains("impl < C : Clone > Row < C > where C : Default"));
        assert!(output.contains("fn from_cursor < C2 :"));
    }

    #[test]
    fn read_and_write_errors_accumulate() {
        let err = expand(parse_quote! {
            struct Row {
                a: Vec<i32>,
                #[cursor(column = "b_col")]
                b: Option<std::time::Duration>,
            }
        })
        .unwrap_err();
        // a: read + write, b: explicit column on read + write
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn adapter_errors_reported_before_generation() {
        let err = expand(parse_quote! {
            struct Row {
                #[cursor(adapter = "&Foo")]
                a: Foo,
                b: Vec<i32>,
            }
        })
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.to_string().contains("not a nameable type"));
    }

    #[test]
    fn unreadable_optional_documented() {
        let output = expand(parse_quote! {
            #[cursor(read)]
            struct Row {
                a: Option<Vec<i32>>,
            }
        })
        .unwrap();
        assert!(output.contains("can't be read from cursor"));
        assert!(output.contains("allow (unused_variables)"));
    }

    #[test]
    fn empty_struct() {
        let output = expand(parse_quote! {
            struct Empty {}
        })
        .unwrap();
        assert!(output.contains("Ok (Self { })"));
        assert!(output.contains("let values ="));
    }
}
