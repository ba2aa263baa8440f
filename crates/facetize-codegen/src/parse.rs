// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing with darling.
//!
//! All configuration of the generator is declarative attribute data.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── facet.rs        - #[facet(source = "..", ..)] on targets → FacetSpecification
//! ├── dtos.rs         - #[facet_dtos(..)] on CRUD sources → DtoAttrs
//! ├── field.rs        - #[facet(required | init_only | ..)] on source fields
//! └── module_args.rs  - #[facets(crate = "..")] on the module
//! ```
//!
//! The helper attributes are not registered anywhere: the module macro
//! reads them and strips them from every item it re-emits.

mod dtos;
mod facet;
mod field;
mod module_args;

pub use dtos::{CrudVariant, DtoAttrs};
pub use facet::{
    FacetAttrs, FacetOptions, FacetSpecification, IdentityPolicy, MemberFilter, NullablePolicy
};
pub use field::FieldAttrs;
pub use module_args::ModuleArgs;
use syn::{Attribute, ItemStruct};

/// Target-level facet attribute name.
pub const FACET: &str = "facet";

/// CRUD source attribute name.
pub const FACET_DTOS: &str = "facet_dtos";

/// Whether an attribute belongs to the generator.
pub fn is_generator_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(FACET) || attr.path().is_ident(FACET_DTOS)
}

/// Whether a struct is a facet target declaration.
pub fn is_target(item: &ItemStruct) -> bool {
    item.attrs.iter().any(|attr| attr.path().is_ident(FACET))
}

/// The `#[facet_dtos]` attribute of a struct, if any.
pub fn dtos_attr(item: &ItemStruct) -> Option<&Attribute> {
    item.attrs
        .iter()
        .find(|attr| attr.path().is_ident(FACET_DTOS))
}

/// Remove generator attributes from a struct and its fields.
pub fn strip_generator_attrs(item: &mut ItemStruct) {
    item.attrs.retain(|attr| !is_generator_attr(attr));
    for field in item.fields.iter_mut() {
        field.attrs.retain(|attr| !is_generator_attr(attr));
    }
}
