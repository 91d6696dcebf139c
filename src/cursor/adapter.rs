// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Adapter validation and deduplication.
//!
//! Every distinct adapter type named by `#[cursor(adapter = "...")]` is
//! instantiated once per generated routine, before any property statement,
//! and shared by every property that names it:
//!
//! ```text
//! let point_adapter = <PointAdapter as Default>::default();
//! let a: Point = <PointAdapter as ColumnTypeAdapter<Point>>::from_cursor(&point_adapter, cursor, "a")?;
//! let b: Point = <PointAdapter as ColumnTypeAdapter<Point>>::from_cursor(&point_adapter, cursor, "b")?;
//! ```
//!
//! Adapters are ordered by first appearance. Two references are the same
//! adapter when their types are token-equal, so `PointAdapter` and
//! `geo::PointAdapter` get separate instances.
//!
//! Whether an adapter can do the job is answered by a [`Capabilities`]
//! implementation. The derive uses [`TraitCapabilities`], which rejects type
//! shapes that cannot name an adapter and leaves the trait bounds to rustc:
//! adapter calls are spanned on the adapter type, so a missing
//! `ColumnTypeAdapter` impl is reported there.

use convert_case::{Case, Casing};
use quote::quote_spanned;
use syn::{Ident, Type, spanned::Spanned};

use super::{
    error::MappingError,
    names::NameAllocator,
    parse::{Property, Routine, Routines},
    stmt::Binding
};
use crate::utils::types::{display, peel};

/// What an adapter type offers for one property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterMethods {
    /// Can be instantiated with `Default`.
    pub constructible: bool,
    /// Offers `from_cursor` returning the property type.
    pub read:          bool,
    /// Offers `to_values` taking the property type.
    pub write:         bool
}

/// Query what an adapter type supports.
pub trait Capabilities {
    fn adapter_methods(&self, adapter: &Type, value: &Type) -> AdapterMethods;
}

/// Shape check performed at expansion time; trait bounds are checked by the
/// compiler on the generated calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitCapabilities;

impl Capabilities for TraitCapabilities {
    fn adapter_methods(&self, adapter: &Type, _value: &Type) -> AdapterMethods {
        let nameable = matches!(peel(adapter), Type::Path(_));
        AdapterMethods {
            constructible: nameable,
            read:          nameable,
            write:         nameable
        }
    }
}

/// One distinct adapter and its local binding.
#[derive(Debug, Clone)]
pub struct AdapterBinding {
    ty:      Type,
    binding: Ident
}

/// Distinct adapters in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct AdapterBindings {
    entries: Vec<AdapterBinding>
}

impl AdapterBindings {
    /// Local bound to `adapter`.
    #[must_use]
    pub fn binding_for(&self, adapter: &Type) -> Option<&Ident> {
        self.entries
            .iter()
            .find(|entry| entry.ty == *adapter)
            .map(|entry| &entry.binding)
    }

    /// `let binding = <Adapter as Default>::default();` per adapter.
    #[must_use]
    pub fn instantiations(&self) -> Vec<Binding> {
        self.entries
            .iter()
            .map(|entry| {
                let ty = &entry.ty;
                let init = quote_spanned! {ty.span()=>
                    <#ty as ::core::default::Default>::default()
                };
                Binding::new(entry.binding.clone(), init)
            })
            .collect()
    }
}

fn binding_hint(adapter: &Type) -> String {
    match peel(adapter) {
        Type::Path(path) => match path.path.segments.last() {
            Some(segment) => segment.ident.to_string().to_case(Case::Snake),
            None => "adapter".to_owned()
        },
        _ => "adapter".to_owned()
    }
}

fn check(
    property: &Property,
    adapter: &Type,
    methods: AdapterMethods,
    routines: &Routines
) -> Option<MappingError> {
    let value = property.type_text();
    let violation = |missing: &str, expected: String| MappingError::AdapterContractViolation {
        adapter: display(adapter),
        property: property.name_str(),
        missing: missing.to_owned(),
        expected
    };

    if !methods.constructible {
        return Some(violation(
            "is not a nameable type",
            format!("a struct implementing `Default` and `ColumnTypeAdapter<{value}>`")
        ));
    }
    if routines.generates(Routine::Read) && !methods.read {
        return Some(violation(
            "has no `from_cursor`",
            format!(
                "`fn from_cursor<C: Cursor + ?Sized>(&self, cursor: &C, column: &str) -> \
                 Result<{value}>`"
            )
        ));
    }
    if routines.generates(Routine::Write) && !methods.write {
        return Some(violation(
            "has no `to_values`",
            format!(
                "`fn to_values<V: Values>(&self, values: &mut V, column: &str, value: &{value})`"
            )
        ));
    }
    None
}

/// Validate every adapter reference and bind each distinct adapter.
///
/// Must run after property bindings are allocated so adapter locals never
/// shadow a property.
///
/// # Errors
///
/// One [`MappingError::AdapterContractViolation`] per offending property.
pub fn resolve<C: Capabilities>(
    properties: &[Property],
    capabilities: &C,
    routines: &Routines,
    names: &mut NameAllocator
) -> darling::Result<AdapterBindings> {
    let mut errors = darling::Error::accumulator();
    let mut bindings = AdapterBindings::default();

    for property in properties {
        let Some(adapter) = property.adapter() else {
            continue;
        };
        let methods = capabilities.adapter_methods(adapter, property.ty());
        if let Some(violation) = check(property, adapter, methods, routines) {
            errors.push(property.error(violation));
            continue;
        }
        if bindings.binding_for(adapter).is_none() {
            let binding = names.allocate(&binding_hint(adapter));
            bindings.entries.push(AdapterBinding {
                ty: adapter.clone(),
                binding
            });
        }
    }

    errors.finish_with(bindings)
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::{DeriveInput, parse_quote};

    use super::*;
    use crate::cursor::{names::bind_properties, parse::ValueDef};

    fn value(input: DeriveInput) -> ValueDef {
        ValueDef::from_derive_input(&input).unwrap()
    }

    fn resolve_with<C: Capabilities>(
        value: &ValueDef,
        capabilities: &C
    ) -> darling::Result<AdapterBindings> {
        let mut names = NameAllocator::new();
        bind_properties(value.properties(), &mut names);
        resolve(value.properties(), capabilities, value.routines(), &mut names)
    }

    struct ReadOnly;

    impl Capabilities for ReadOnly {
        fn adapter_methods(&self, _adapter: &Type, _value: &Type) -> AdapterMethods {
            AdapterMethods {
                constructible: true,
                read:          true,
                write:         false
            }
        }
    }

    #[test]
    fn shared_adapter_is_bound_once() {
        let value = value(parse_quote! {
            struct Row {
                #[cursor(adapter = "FooAdapter")]
                first: Foo,
                #[cursor(adapter = "BarAdapter")]
                second: Bar,
                #[cursor(adapter = "FooAdapter")]
                third: Foo,
            }
        });
        let bindings = resolve_with(&value, &TraitCapabilities).unwrap();
        assert_eq!(bindings.instantiations().len(), 2);
        assert_eq!(bindings.binding_for(&parse_quote!(FooAdapter)).unwrap(), "foo_adapter");
        assert_eq!(bindings.binding_for(&parse_quote!(BarAdapter)).unwrap(), "bar_adapter");

        let lets: Vec<String> = bindings
            .instantiations()
            .iter()
            .map(|binding| binding.to_token_stream().to_string())
            .collect();
        assert_eq!(lets.len(), 2);
        assert!(lets[0].starts_with(
            "let foo_adapter = < FooAdapter as :: core :: default :: Default > :: default ()"
        ));
        assert!(lets[1].starts_with("let bar_adapter"));
    }

    #[test]
    fn adapter_binding_avoids_property_names() {
        let value = value(parse_quote! {
            struct Row {
                foo_adapter: i32,
                #[cursor(adapter = "FooAdapter")]
                foo: Foo,
            }
        });
        let bindings = resolve_with(&value, &TraitCapabilities).unwrap();
        assert_eq!(bindings.binding_for(&parse_quote!(FooAdapter)).unwrap(), "foo_adapter_2");
    }

    #[test]
    fn qualified_adapter_uses_last_segment() {
        let value = value(parse_quote! {
            struct Row {
                #[cursor(adapter = "geo::JsonPointAdapter")]
                at: Point,
            }
        });
        let bindings = resolve_with(&value, &TraitCapabilities).unwrap();
        assert_eq!(
            bindings.binding_for(&parse_quote!(geo::JsonPointAdapter)).unwrap(),
            "json_point_adapter"
        );
    }

    #[test]
    fn reference_adapter_rejected() {
        let value = value(parse_quote! {
            struct Row {
                #[cursor(adapter = "&'static FooAdapter")]
                foo: Foo,
            }
        });
        let err = resolve_with(&value, &TraitCapabilities).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("&'static FooAdapter"));
        assert!(message.contains("not a nameable type"));
    }

    #[test]
    fn missing_write_reported_when_write_generated() {
        let value = value(parse_quote! {
            struct Row {
                #[cursor(adapter = "FooAdapter")]
                foo: Foo,
            }
        });
        let err = resolve_with(&value, &ReadOnly).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("has no `to_values`"));
        assert!(message.contains("value: &Foo"));
    }

    #[test]
    fn missing_write_ignored_for_read_only() {
        let value = value(parse_quote! {
            #[cursor(read)]
            struct Row {
                #[cursor(adapter = "FooAdapter")]
                foo: Foo,
            }
        });
        let bindings = resolve_with(&value, &ReadOnly).unwrap();
        assert_eq!(bindings.instantiations().len(), 1);
    }

    #[test]
    fn every_offending_property_reported() {
        let value = value(parse_quote! {
            struct Row {
                #[cursor(adapter = "(A, B)")]
                first: Foo,
                #[cursor(adapter = "[A; 2]")]
                second: Foo,
            }
        });
        let err = resolve_with(&value, &TraitCapabilities).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
