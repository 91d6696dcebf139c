// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type shape helpers.
//!
//! Types are matched on the last path segment, so `Option<T>`,
//! `std::option::Option<T>` and `core::option::Option<T>` are all treated the
//! same. Invisible groups introduced by `macro_rules!` expansion are looked
//! through.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// Strip invisible and parenthesised groups around a type.
#[must_use]
pub fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => peel(&group.elem),
        Type::Paren(paren) => peel(&paren.elem),
        other => other
    }
}

/// Last path segment of an unqualified path type.
#[must_use]
pub fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match peel(ty) {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None
    }
}

/// Single generic type argument of a segment such as `Vec<T>`.
#[must_use]
pub fn single_type_argument(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    if arguments.args.len() != 1 {
        return None;
    }
    match arguments.args.first() {
        Some(GenericArgument::Type(ty)) => Some(ty),
        _ => None
    }
}

/// Inner type of `Option<T>`, or `None` if `ty` is not an option.
#[must_use]
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident != "Option" {
        return None;
    }
    single_type_argument(segment)
}

/// Render a type or path the way it is usually written, for diagnostics.
#[must_use]
pub fn display<T: ToTokens>(node: &T) -> String {
    node.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}
