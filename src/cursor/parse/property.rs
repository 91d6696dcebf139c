// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `column = "name"` | Column to read and write instead of the field name |
//! | `adapter = "Type"` | `ColumnTypeAdapter` used for both directions |
//! | `values_with = "path::to_fn"` | `fn(&T) -> Option<Values>` merged into the write map |
//!
//! `adapter` and `values_with` are mutually exclusive.
//!
//! # Classification
//!
//! A property is nullable when its declared type is `Option<T>`; the catalog
//! is then consulted for `T`. Each property is exactly one of:
//!
//! - adapter-mapped (`adapter` present)
//! - natively supported (catalog entry for the value type)
//! - unsupported

use darling::FromField;
use syn::{Field, Ident, Path, Type, ext::IdentExt};

use crate::{
    cursor::{
        catalog::{CellOperations, classify},
        error::MappingError
    },
    utils::types::{display, option_inner}
};

#[derive(Debug, FromField)]
#[darling(attributes(cursor))]
struct PropertyAttrs {
    ident: Option<Ident>,

    ty: Type,

    #[darling(default)]
    column: Option<String>,

    #[darling(default)]
    adapter: Option<Type>,

    #[darling(default)]
    values_with: Option<Path>
}

/// One declared field of the value struct.
#[derive(Debug)]
pub struct Property {
    /// Field identifier (e.g., `id`, `r#type`).
    ident: Ident,

    /// Declared type, `Option` included (e.g., `Option<String>`).
    ty: Type,

    /// Explicit column from `#[cursor(column = "...")]`.
    ///
    /// `None` means the field name is used verbatim.
    column: Option<String>,

    /// Adapter type from `#[cursor(adapter = "...")]`.
    adapter: Option<Type>,

    /// Values factory from `#[cursor(values_with = "...")]`; write only.
    values_factory: Option<Path>,

    /// Declared type is `Option<T>`.
    nullable: bool,

    /// Catalog entry for the type with `Option` removed.
    cell: Option<CellOperations>
}

impl Property {
    /// Parse a property from a named field.
    ///
    /// # Errors
    ///
    /// - unnamed field
    /// - unknown or malformed `#[cursor(...)]` keys
    /// - empty `column`
    /// - `adapter` combined with `values_with`
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let attrs = PropertyAttrs::from_field(field)?;
        let ident = attrs.ident.ok_or_else(|| {
            darling::Error::custom("CursorValue fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        if attrs.column.as_deref() == Some("") {
            errors.push(darling::Error::custom("column name must not be empty").with_span(field));
        }
        if let (Some(adapter), Some(_)) = (&attrs.adapter, &attrs.values_with) {
            errors.push(
                darling::Error::custom("`adapter` already writes the property; drop `values_with`")
                    .with_span(adapter)
            );
        }

        let mut property = Self {
            ident,
            nullable: option_inner(&attrs.ty).is_some(),
            ty: attrs.ty,
            column: attrs.column,
            adapter: attrs.adapter,
            values_factory: attrs.values_with,
            cell: None
        };
        property.cell = classify(property.value_type());

        errors.finish_with(property)
    }

    /// Field identifier, raw prefix included.
    #[must_use]
    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Field name without a raw prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Declared type, `Option` included.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Type with one `Option` layer removed.
    #[must_use]
    pub fn value_type(&self) -> &Type {
        option_inner(&self.ty).unwrap_or(&self.ty)
    }

    /// Column this property reads from and writes to.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.column.clone().unwrap_or_else(|| self.name_str())
    }

    /// Explicit `column = "..."` override.
    #[must_use]
    pub fn explicit_column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    #[must_use]
    pub fn adapter(&self) -> Option<&Type> {
        self.adapter.as_ref()
    }

    #[must_use]
    pub fn values_factory(&self) -> Option<&Path> {
        self.values_factory.as_ref()
    }

    #[must_use]
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Check if the catalog has an entry for the value type.
    #[must_use]
    pub fn supported_type(&self) -> bool {
        self.cell.is_some()
    }

    /// Catalog entry for the value type.
    #[must_use]
    pub fn cell(&self) -> Option<CellOperations> {
        self.cell
    }

    /// Attach a mapping error to this property's declaration.
    #[must_use]
    pub fn error(&self, error: MappingError) -> darling::Error {
        darling::Error::custom(error).with_span(&self.ident)
    }

    /// Printable declared type for diagnostics.
    #[must_use]
    pub fn type_text(&self) -> String {
        display(&self.ty)
    }
}
