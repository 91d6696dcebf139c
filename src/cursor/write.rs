// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct → values routine.
//!
//! Per property, in declaration order:
//!
//! | Property | Statement |
//! |----------|-----------|
//! | adapter | `<A as ColumnTypeAdapter<T>>::to_values(&a, &mut values, "col", &self.v);` |
//! | `values_with = f` | `if let Some(v_values) = f(&self.v) { Values::put_all(&mut values, v_values); }` |
//! | native (`Option<T>` included) | `Values::put(&mut values, "col", Value::from(Clone::clone(&self.v)));` |
//! | unsupported | error |
//!
//! Unlike reads, an unsupported `Option<T>` has no fallback: silently
//! dropping a column on write would lose data.

use syn::Ident;

use super::{
    adapter::AdapterBindings,
    error::MappingError,
    names::NameAllocator,
    parse::{Routine, ValueDef},
    stmt::{WriteRoutine, WriteStatement}
};

/// Build the write routine.
///
/// Shares `bindings` and `adapters` with the read routine; helper locals
/// come from `names`.
///
/// # Errors
///
/// Every unmappable property, accumulated.
pub fn generate_write(
    value: &ValueDef,
    bindings: &[Ident],
    adapters: &AdapterBindings,
    mut names: NameAllocator
) -> darling::Result<WriteRoutine> {
    let mut errors = darling::Error::accumulator();
    let mut statements = Vec::new();

    for (property, binding) in value.properties().iter().zip(bindings) {
        let field = property.ident().clone();

        if let Some(adapter) = property.adapter() {
            let Some(adapter_binding) = adapters.binding_for(adapter) else {
                errors.push(darling::Error::custom("adapter was not resolved").with_span(adapter));
                continue;
            };
            statements.push(WriteStatement::Adapter {
                binding: adapter_binding.clone(),
                adapter: adapter.clone(),
                value: property.ty().clone(),
                column: property.column_name(),
                field
            });
        } else if let Some(factory) = property.values_factory() {
            statements.push(WriteStatement::Merge {
                local: names.allocate(&format!("{binding}_values")),
                factory: factory.clone(),
                field
            });
        } else if property.supported_type() {
            statements.push(WriteStatement::Put {
                column: property.column_name(),
                field
            });
        } else {
            errors.push(property.error(MappingError::UnsupportedType {
                property: property.name_str(),
                ty:       property.type_text(),
                routine:  Routine::Write
            }));
        }
    }

    errors.finish_with(WriteRoutine {
        adapters: adapters.instantiations(),
        statements,
        capacity: value.properties().len()
    })
}
