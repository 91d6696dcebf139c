// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Wraps routine bodies into the generated inherent `impl` block.
//!
//! ```rust,ignore
//! impl Row {
//!     pub fn from_cursor<C: ::cursor_core::Cursor + ?Sized>(
//!         cursor: &C
//!     ) -> Result<Self, ::cursor_core::CursorError> { ... }
//!
//!     pub fn to_values(&self) -> ::cursor_core::ContentValues { ... }
//!
//!     pub fn mapper<C: ::cursor_core::Cursor + ?Sized>(
//!     ) -> fn(&C) -> Result<Self, ::cursor_core::CursorError> {
//!         Self::from_cursor::<C>
//!     }
//! }
//! ```
//!
//! Routines take the struct's visibility and generics.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{GenericParam, Generics, Ident};

use super::{
    names::CURSOR,
    parse::ValueDef,
    stmt::{ReadRoutine, WriteRoutine}
};

/// Name for the cursor type parameter that no struct generic uses.
fn cursor_type_param(generics: &Generics) -> Ident {
    let taken: Vec<String> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.to_string()),
            GenericParam::Const(constant) => Some(constant.ident.to_string()),
            GenericParam::Lifetime(_) => None
        })
        .collect();
    let mut candidate = "C".to_owned();
    let mut counter = 2_usize;
    while taken.contains(&candidate) {
        candidate = format!("C{counter}");
        counter += 1;
    }
    Ident::new(&candidate, Span::call_site())
}

fn read_doc(value: &ValueDef, routine: &ReadRoutine) -> String {
    let mut doc = format!("Read a `{}` from the current row of `cursor`.", value.ident());
    let notes: Vec<&str> = routine.notes().collect();
    if !notes.is_empty() {
        doc.push_str("\n\n");
        for note in notes {
            doc.push_str("- ");
            doc.push_str(note);
            doc.push('\n');
        }
    }
    doc.push_str(
        "\n\n# Errors\n\nFails when a required column is missing or a cell cannot be \
         converted."
    );
    doc
}

fn write_doc(value: &ValueDef, routine: &WriteRoutine) -> String {
    let columns: Vec<String> = routine
        .statements
        .iter()
        .filter_map(|statement| statement.column())
        .map(|column| format!("`{column}`"))
        .collect();
    let mut doc = format!("Collect this `{}` into a column/value map.", value.ident());
    if !columns.is_empty() {
        doc.push_str(&format!("\n\nWrites columns {}.", columns.join(", ")));
    }
    doc
}

/// Generate the `impl` block.
#[must_use]
pub fn generate(
    value: &ValueDef,
    read: Option<&ReadRoutine>,
    write: Option<&WriteRoutine>
) -> TokenStream {
    let ident = value.ident();
    let vis = value.vis();
    let krate = value.krate();
    let error = value.error_type();
    let (impl_generics, ty_generics, where_clause) = value.generics().split_for_impl();
    let cursor = Ident::new(CURSOR, Span::call_site());
    let cursor_ty = cursor_type_param(value.generics());
    let routines = value.routines();

    let read_fn = routines.read().zip(read).map(|(name, routine)| {
        let doc = read_doc(value, routine);
        let body = routine.lower();
        let allow = (!routine.uses_cursor()).then(|| quote! { #[allow(unused_variables)] });
        quote! {
            #[doc = #doc]
            #allow
            #vis fn #name<#cursor_ty: #krate::Cursor + ?::core::marker::Sized>(
                #cursor: &#cursor_ty
            ) -> ::core::result::Result<Self, #error> {
                #body
            }
        }
    });

    let mapper_fn = routines.mapper().zip(routines.read()).map(|(name, read_name)| {
        let doc = format!(
            "Function pointer to [`{ident}::{read_name}`], for row-mapping combinators that \
             take a `fn(&C) -> Result<T, E>`."
        );
        quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #name<#cursor_ty: #krate::Cursor + ?::core::marker::Sized>(
            ) -> fn(&#cursor_ty) -> ::core::result::Result<Self, #error> {
                Self::#read_name::<#cursor_ty>
            }
        }
    });

    let write_fn = routines.write().zip(write).map(|(name, routine)| {
        let doc = write_doc(value, routine);
        let values_type = value.values_type();
        let body = routine.lower(krate, values_type);
        quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #name(&self) -> #values_type {
                #body
            }
        }
    });

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #read_fn
            #mapper_fn
            #write_fn
        }
    }
}
