// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cursor → struct routine.
//!
//! Per property, in declaration order:
//!
//! | Property | Statements |
//! |----------|------------|
//! | adapter | `let v: T = <A as ColumnTypeAdapter<T>>::from_cursor(&a, cursor, "col")?;` |
//! | native | `let v: T = Cursor::get_x(cursor, Cursor::require_column_index(cursor, "col")?)?;` |
//! | native, `Option<T>` | `let v_column_index = Cursor::column_index(cursor, "col");` then a `match` yielding `None` for a missing column or `NULL` cell |
//! | unsupported, `Option<T>` | `let v: Option<T> = None;` |
//! | unsupported, explicit column | error |
//! | unsupported | error |
//!
//! The body ends with `Ok(Self { .. })`.

use proc_macro2::Span;
use quote::{quote, quote_spanned};
use syn::{Ident, spanned::Spanned};

use super::{
    adapter::AdapterBindings,
    error::MappingError,
    names::{CURSOR, NameAllocator},
    parse::{Routine, ValueDef},
    stmt::{Binding, Construction, ReadRoutine}
};

/// Build the read routine.
///
/// `bindings` holds one local per property, parallel to
/// `value.properties()`. `names` must already contain the property and
/// adapter bindings; helper locals are allocated from it.
///
/// # Errors
///
/// Every unmappable property, accumulated.
pub fn generate_read(
    value: &ValueDef,
    bindings: &[Ident],
    adapters: &AdapterBindings,
    mut names: NameAllocator
) -> darling::Result<ReadRoutine> {
    let krate = value.krate();
    let cursor = Ident::new(CURSOR, Span::call_site());
    let index = Ident::new("index", Span::call_site());

    let mut errors = darling::Error::accumulator();
    let mut statements = Vec::new();
    let mut construction = Construction::default();

    for (property, binding) in value.properties().iter().zip(bindings) {
        construction.push(property.ident().clone(), binding.clone());
        let column = property.column_name();
        let ty = property.ty().clone();

        if let Some(adapter) = property.adapter() {
            let Some(adapter_binding) = adapters.binding_for(adapter) else {
                errors.push(darling::Error::custom("adapter was not resolved").with_span(adapter));
                continue;
            };
            let init = quote_spanned! {adapter.span()=>
                <#adapter as #krate::ColumnTypeAdapter<#ty>>::from_cursor(
                    &#adapter_binding,
                    #cursor,
                    #column
                )?
            };
            statements.push(Binding::typed(binding.clone(), ty, init));
        } else if let Some(cell) = property.cell() {
            if property.nullable() {
                let index_local = names.allocate(&format!("{binding}_column_index"));
                statements.push(Binding::new(
                    index_local.clone(),
                    quote! { #krate::Cursor::column_index(#cursor, #column) }
                ));
                let get = cell.read(krate, &cursor, &quote!(#index));
                let init = quote! {
                    match #index_local {
                        ::core::option::Option::Some(#index)
                            if !#krate::Cursor::is_null(#cursor, #index)? =>
                        {
                            ::core::option::Option::Some(#get)
                        }
                        _ => ::core::option::Option::None
                    }
                };
                statements.push(Binding::typed(binding.clone(), ty, init));
            } else {
                let lookup = quote! { #krate::Cursor::require_column_index(#cursor, #column)? };
                let init = cell.read(krate, &cursor, &lookup);
                statements.push(Binding::typed(binding.clone(), ty, init));
            }
        } else if let Some(explicit) = property.explicit_column() {
            errors.push(property.error(MappingError::UnsupportedTypeWithExplicitColumn {
                property: property.name_str(),
                ty:       property.type_text(),
                column:   explicit.to_owned()
            }));
        } else if property.nullable() {
            let note = format!(
                "`{}` can't be read from cursor and is always `None`",
                property.name_str()
            );
            let init = quote!(::core::option::Option::None);
            statements.push(Binding::typed(binding.clone(), ty, init).with_note(note));
        } else {
            errors.push(property.error(MappingError::UnsupportedType {
                property: property.name_str(),
                ty:       property.type_text(),
                routine:  Routine::Read
            }));
        }
    }

    errors.finish_with(ReadRoutine {
        adapters: adapters.instantiations(),
        statements,
        construction
    })
}
