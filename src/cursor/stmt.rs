// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement model shared by the read and write generators.
//!
//! Generators produce plain data: typed `let` bindings, write statements,
//! and the construction expression. Lowering to tokens happens here so the
//! generators stay testable without matching on token strings.
//!
//! # Read body
//!
//! ```text
//! let foo_adapter = <FooAdapter as Default>::default();   // hoisted adapters
//! let a: i32 = ...;                                         // one per property
//! let b_column_index = ...;                                 // nullable lookups
//! let b: Option<String> = match b_column_index { ... };
//! Ok(Self { a, b })
//! ```
//!
//! # Write body
//!
//! ```text
//! let mut values = <Map as Values>::with_capacity(n);
//! let foo_adapter = <FooAdapter as Default>::default();
//! Values::put(&mut values, "a", Value::from(Clone::clone(&self.a)));
//! if let Some(x_values) = factory(&self.x) { Values::put_all(&mut values, x_values); }
//! values
//! ```

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};
use syn::{Ident, Path, Type, spanned::Spanned};

use super::names::VALUES;

/// `let name[: ty] = init;`
#[derive(Debug, Clone)]
pub struct Binding {
    name: Ident,
    ty:   Option<Type>,
    init: TokenStream,
    note: Option<String>
}

impl Binding {
    /// Untyped binding.
    #[must_use]
    pub fn new(name: Ident, init: TokenStream) -> Self {
        Self {
            name,
            ty: None,
            init,
            note: None
        }
    }

    /// Binding with an explicit type annotation.
    #[must_use]
    pub fn typed(name: Ident, ty: Type, init: TokenStream) -> Self {
        Self {
            name,
            ty: Some(ty),
            init,
            note: None
        }
    }

    /// Attach a human-readable remark, surfaced in the routine's docs.
    #[must_use]
    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl ToTokens for Binding {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let init = &self.init;
        tokens.extend(match &self.ty {
            Some(ty) => quote! { let #name: #ty = #init; },
            None => quote! { let #name = #init; }
        });
    }
}

/// `Self { field: binding, ... }` in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Construction {
    fields: Vec<(Ident, Ident)>
}

impl Construction {
    pub fn push(&mut self, field: Ident, binding: Ident) {
        self.fields.push((field, binding));
    }
}

impl ToTokens for Construction {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let fields = self.fields.iter().map(|(field, binding)| {
            if field == binding {
                quote! { #field }
            } else {
                quote! { #field: #binding }
            }
        });
        tokens.extend(quote! { Self { #(#fields),* } });
    }
}

/// One statement of the write routine.
#[derive(Debug, Clone)]
pub enum WriteStatement {
    /// Native cell: `Values::put(&mut values, column, Value::from(..))`.
    Put {
        column: String,
        field:  Ident
    },

    /// Adapter-mapped: `ColumnTypeAdapter::to_values(&adapter, ..)`.
    Adapter {
        binding: Ident,
        adapter: Type,
        value:   Type,
        column:  String,
        field:   Ident
    },

    /// Legacy factory: null-guarded `Values::put_all`.
    Merge {
        local:   Ident,
        factory: Path,
        field:   Ident
    }
}

impl WriteStatement {
    /// Column written by this statement; merges write whatever the factory
    /// returns.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Put {
                column, ..
            }
            | Self::Adapter {
                column, ..
            } => Some(column),
            Self::Merge {
                ..
            } => None
        }
    }

    fn lower(&self, krate: &Path, values: &Ident) -> TokenStream {
        match self {
            Self::Put {
                column,
                field
            } => quote! {
                #krate::Values::put(
                    &mut #values,
                    #column,
                    #krate::Value::from(::core::clone::Clone::clone(&self.#field))
                );
            },
            Self::Adapter {
                binding,
                adapter,
                value,
                column,
                field
            } => quote_spanned! {adapter.span()=>
                <#adapter as #krate::ColumnTypeAdapter<#value>>::to_values(
                    &#binding,
                    &mut #values,
                    #column,
                    &self.#field
                );
            },
            Self::Merge {
                local,
                factory,
                field
            } => quote_spanned! {factory.span()=>
                if let ::core::option::Option::Some(#local) = #factory(&self.#field) {
                    #krate::Values::put_all(&mut #values, #local);
                }
            }
        }
    }
}

/// Generated cursor → struct routine.
#[derive(Debug, Clone)]
pub struct ReadRoutine {
    pub adapters:     Vec<Binding>,
    pub statements:   Vec<Binding>,
    pub construction: Construction
}

impl ReadRoutine {
    /// Check whether any statement reads from the cursor parameter.
    #[must_use]
    pub fn uses_cursor(&self) -> bool {
        self.statements.iter().any(|statement| statement.note().is_none())
    }

    /// Remarks attached to statements, in declaration order.
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().filter_map(Binding::note)
    }

    /// Method body.
    #[must_use]
    pub fn lower(&self) -> TokenStream {
        let adapters = &self.adapters;
        let statements = &self.statements;
        let construction = &self.construction;
        quote! {
            #(#adapters)*
            #(#statements)*
            ::core::result::Result::Ok(#construction)
        }
    }
}

/// Generated struct → values routine.
#[derive(Debug, Clone)]
pub struct WriteRoutine {
    pub adapters:   Vec<Binding>,
    pub statements: Vec<WriteStatement>,
    pub capacity:   usize
}

impl WriteRoutine {
    /// Method body returning a `values_type` map.
    #[must_use]
    pub fn lower(&self, krate: &Path, values_type: &Path) -> TokenStream {
        let values = Ident::new(VALUES, Span::call_site());
        let mutability = (!self.statements.is_empty()).then(|| quote!(mut));
        let capacity = self.capacity;
        let adapters = &self.adapters;
        let statements = self
            .statements
            .iter()
            .map(|statement| statement.lower(krate, &values));
        quote! {
            let #mutability #values = <#values_type as #krate::Values>::with_capacity(#capacity);
            #(#adapters)*
            #(#statements)*
            #values
        }
    }
}
