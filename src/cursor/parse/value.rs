// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `read` / `read = "name"` | `from_cursor` | Generate the cursor read routine |
//! | `write` / `write = "name"` | `to_values` | Generate the values write routine |
//! | `mapper` / `mapper = "name"` | off | Generate a function-pointer accessor for the read routine |
//! | `krate = "path"` | `::cursor_core` | Path of the runtime crate |
//! | `values = "path"` | `<krate>::ContentValues` | Map type returned by the write routine |
//! | `error = "path"` | `<krate>::CursorError` | Error type of the read routine |
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(CursorValue)]
//! #[cursor(read, mapper, error = "crate::DbError")]
//! pub struct Note {
//!     pub id: i64,
//!     #[cursor(column = "body_text")]
//!     pub body: Option<String>,
//! }
//! ```

use darling::{FromDeriveInput, util::Override};
use syn::{DeriveInput, Generics, Ident, Path, Visibility, parse_quote};

use super::{Property, Routines};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(cursor))]
struct ValueAttrs {
    ident: Ident,

    vis: Visibility,

    generics: Generics,

    #[darling(default)]
    read: Option<Override<Ident>>,

    #[darling(default)]
    write: Option<Override<Ident>>,

    #[darling(default)]
    mapper: Option<Override<Ident>>,

    #[darling(default)]
    krate: Option<Path>,

    #[darling(default)]
    values: Option<Path>,

    #[darling(default)]
    error: Option<Path>
}

/// Parsed `#[derive(CursorValue)]` input.
#[derive(Debug)]
pub struct ValueDef {
    ident:      Ident,
    vis:        Visibility,
    generics:   Generics,
    properties: Vec<Property>,
    routines:   Routines,
    krate:      Path,
    values:     Path,
    error:      Path
}

impl ValueDef {
    /// Parse the derive input.
    ///
    /// Errors from the container attribute and from every field are
    /// accumulated and reported together.
    ///
    /// # Errors
    ///
    /// Enums, unions, tuple structs, unknown keys, and invalid routine
    /// settings.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ValueAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("CursorValue requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("CursorValue can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        let properties: Vec<Property> = fields
            .iter()
            .filter_map(|field| errors.handle(Property::from_field(field)))
            .collect();
        let routines = errors.handle(Routines::from_settings(
            attrs.read,
            attrs.write,
            attrs.mapper,
            &attrs.ident
        ));
        errors.finish()?;

        let krate = attrs.krate.unwrap_or_else(|| parse_quote!(::cursor_core));
        let values = attrs.values.unwrap_or_else(|| parse_quote!(#krate::ContentValues));
        let error = attrs.error.unwrap_or_else(|| parse_quote!(#krate::CursorError));

        let routines = routines.ok_or_else(|| {
            darling::Error::custom("invalid routine settings").with_span(&attrs.ident)
        })?;

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            generics: attrs.generics,
            properties,
            routines,
            krate,
            values,
            error
        })
    }

    /// Struct name.
    #[must_use]
    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Visibility given to generated routines.
    #[must_use]
    pub fn vis(&self) -> &Visibility {
        &self.vis
    }

    #[must_use]
    pub fn generics(&self) -> &Generics {
        &self.generics
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub fn routines(&self) -> &Routines {
        &self.routines
    }

    /// Path of the runtime crate.
    #[must_use]
    pub fn krate(&self) -> &Path {
        &self.krate
    }

    /// Map type returned by the write routine.
    #[must_use]
    pub fn values_type(&self) -> &Path {
        &self.values
    }

    /// Error type of the read routine.
    #[must_use]
    pub fn error_type(&self) -> &Path {
        &self.error
    }
}
