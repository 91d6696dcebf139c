// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Native cell kinds the cursor reads and the values map accepts.
//!
//! | Property type | Getter | Post-read |
//! |---------------|--------|-----------|
//! | `String` | `get_string` | |
//! | `i32` | `get_int` | |
//! | `i64` | `get_long` | |
//! | `i16` | `get_short` | |
//! | `f32` | `get_float` | |
//! | `f64` | `get_double` | |
//! | `bool` | `get_int` | `== 1` |
//! | `Vec<u8>` | `get_blob` | |
//! | `Box<[u8]>` | `get_blob` | `.into_boxed_slice()` |
//!
//! Writes for every kind go through `Values::put` with `Value::from`, which
//! already stores `bool` as `1`/`0`.
//!
//! Lookup matches the last path segment, so `std::string::String` and
//! `core::primitive::i64` classify like their bare spellings. Anything else,
//! including `Option<T>`, is unsupported here; nullability is stripped by the
//! property model before the catalog is consulted.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Path, Type};

use crate::utils::types::{last_segment, peel, single_type_argument};

/// A natively supported cell kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `String`, read as text.
    String,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `i16`.
    Short,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// `bool`, stored as integer `1` / `0`.
    Boolean,
    /// `Vec<u8>`.
    Blob,
    /// `Box<[u8]>`, read as a `Vec<u8>` and converted.
    BoxedBlob
}

/// Adjustment applied to the raw getter result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Getter result used as is.
    Identity,
    /// `raw == 1`.
    EqualsOne,
    /// `raw.into_boxed_slice()`.
    BoxedSlice
}

impl CellKind {
    /// Name of the `Cursor` getter for this kind.
    #[must_use]
    pub const fn getter(self) -> &'static str {
        match self {
            Self::String => "get_string",
            Self::Int | Self::Boolean => "get_int",
            Self::Long => "get_long",
            Self::Short => "get_short",
            Self::Float => "get_float",
            Self::Double => "get_double",
            Self::Blob | Self::BoxedBlob => "get_blob"
        }
    }

    #[must_use]
    pub const fn transform(self) -> Transform {
        match self {
            Self::Boolean => Transform::EqualsOne,
            Self::BoxedBlob => Transform::BoxedSlice,
            _ => Transform::Identity
        }
    }
}

/// Read operations for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOperations {
    kind: CellKind
}

impl CellOperations {
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Expression reading this kind from `cursor` at `index`.
    ///
    /// The getter result is unwrapped with `?`, so the expression must sit in
    /// a function returning a `Result` whose error converts from
    /// `CursorError`.
    #[must_use]
    pub fn read(&self, krate: &Path, cursor: &Ident, index: &TokenStream) -> TokenStream {
        let kind = self.kind();
        let getter = format_ident!("{}", kind.getter());
        let raw = quote! { #krate::Cursor::#getter(#cursor, #index)? };
        match kind.transform() {
            Transform::Identity => raw,
            Transform::EqualsOne => quote! { #raw == 1 },
            Transform::BoxedSlice => quote! { #raw.into_boxed_slice() }
        }
    }
}

/// Look up the catalog entry for `ty`.
#[must_use]
pub fn classify(ty: &Type) -> Option<CellOperations> {
    let segment = last_segment(ty)?;
    let name = segment.ident.to_string();
    let kind = if segment.arguments.is_empty() {
        match name.as_str() {
            "String" => CellKind::String,
            "i32" => CellKind::Int,
            "i64" => CellKind::Long,
            "i16" => CellKind::Short,
            "f32" => CellKind::Float,
            "f64" => CellKind::Double,
            "bool" => CellKind::Boolean,
            _ => return None
        }
    } else {
        let argument = single_type_argument(segment)?;
        match name.as_str() {
            "Vec" if is_u8(argument) => CellKind::Blob,
            "Box" if is_u8_slice(argument) => CellKind::BoxedBlob,
            _ => return None
        }
    };
    Some(CellOperations {
        kind
    })
}

fn is_u8(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == "u8" && segment.arguments.is_empty())
}

fn is_u8_slice(ty: &Type) -> bool {
    match peel(ty) {
        Type::Slice(slice) => is_u8(&slice.elem),
        _ => false
    }
}
