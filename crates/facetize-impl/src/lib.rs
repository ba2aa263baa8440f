// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Module `#[facets(...)]`
//!
//! ```rust,ignore
//! #[facetize::facets(crate = "::facetize")] // Optional: runtime crate path
//! pub mod domain { /* ... */ }
//! ```
//!
//! ## Target `#[facet(...)]`
//!
//! ```rust,ignore
//! #[facet(
//!     source = "User",               // Required: source struct of this module
//!     exclude(password),             // Optional: drop members
//!     include(id, name),             // Optional: keep only these (exclude wins)
//!     nested(AddressDto),            // Optional: facets for nested members
//!     include_fields,                // Optional: restricted fields too
//!     nullable,                      // Optional: wrap members in Option
//!     copy_attributes,               // Optional: copy field attributes
//!     configuration = "UserMapper",  // Optional: custom mapping hook
//!     record,                        // Optional: immutable conventions
//!     preserve_init_only = false,    // Optional: default true for records/tuples
//!     preserve_required = false,     // Optional: default true for records/tuples
//!     constructor = false,           // Optional: skip new() and From impls
//!     default_constructor = false,   // Optional: skip impl Default
//!     projection = false,            // Optional: skip projection()
//!     reverse = false,               // Optional: skip back_to()
//!     qualified_file_name            // Optional: module-qualified artifact name
//! )]
//! pub struct UserDto;
//! ```
//!
//! ## Source Field Markers
//!
//! ```rust,ignore
//! pub struct User {
//!     #[facet(flatten)]      // Base struct, members lifted
//!     pub base: Entity,
//!     #[facet(required)]     // Must be supplied at construction
//!     pub password: String,
//!     #[facet(init_only)]    // Fixed after construction
//!     pub email: String,
//!     #[facet(id)]           // Identity member besides `id`
//!     pub key: Uuid,
//! }
//! ```
//!
//! ## CRUD Sources `#[facet_dtos(...)]`
//!
//! ```rust,ignore
//! #[facet_dtos(create, update, upsert, response, query, exclude(password), derive(Debug, Clone))]
//! pub struct User { /* ... */ }
//! ```

use proc_macro::TokenStream;

/// Attribute macro generating facets for the structs of an inline module.
///
/// # Overview
///
/// Every struct of the module carrying `#[facet(source = "...")]` becomes a
/// facet of its source: a type holding a filtered subset of the source
/// members, with mappings in both directions. Every struct carrying
/// `#[facet_dtos(...)]` gets CRUD request and response facets.
///
/// # Example
///
/// ```rust,ignore
/// #[facetize::facets]
/// pub mod domain {
///     pub struct User {
///         pub id: i64,
///         pub name: String,
///         #[facet(required)]
///         pub password: String
///     }
///
///     #[facet(source = "User", exclude(password))]
///     #[derive(Debug, Clone)]
///     pub struct UserDto;
/// }
/// ```
///
/// # Generated Code
///
/// For `UserDto`, generates:
/// - the declaration with members `id` and `name`
/// - `MEMBERS` and `REQUIRED_MEMBERS` constants
/// - `new(&User)`, `projection()`, `back_to()`
/// - `impl Default`, `impl From<&User>`, `impl From<User>`
/// - `impl Facet` and `impl Reversible`
///
/// | Facet shape | Generated constructor |
/// |-------------|-----------------------|
/// | plain struct | `new` |
/// | init-only members | `new` and `from_source` |
/// | init-only members + configuration | `from_source` through `FacetFactory` |
/// | hand-written `new` | `from_source` stub |
#[proc_macro_attribute]
pub fn facets(args: TokenStream, item: TokenStream) -> TokenStream {
    facetize_codegen::expand_module(args.into(), item.into()).into()
}
