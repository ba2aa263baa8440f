// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CRUD variant requests on source structs.
//!
//! ```rust,ignore
//! #[facet_dtos(create, update, response, exclude(password), derive(Debug, Clone, Serialize))]
//! pub struct User { .. }
//! ```
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `create` / `update` / `upsert` / `response` / `query` | all, when none given | Variants to generate |
//! | `exclude(..)` | — | Members dropped from every variant |
//! | `nested(..)` | — | Facets used for nested members |
//! | `derive(..)` | `Debug, Clone` | Derives placed on every variant |
//! | `include_fields` | `false` | Collect restricted fields |
//! | `copy_attributes` | `false` | Copy field attributes |

use darling::{FromMeta, util::PathList};
use syn::{Attribute, Ident, Meta, Path};

use super::facet::type_names;

/// One generated CRUD variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudVariant {
    /// `Create{S}Request`: identity members dropped.
    Create,
    /// `Update{S}Request`: every member.
    Update,
    /// `Upsert{S}Request`: identity members optional.
    Upsert,
    /// `{S}Response`: every member, with a projection.
    Response,
    /// `{S}Query`: every member optional, no reverse mapping.
    Query
}

impl CrudVariant {
    /// Every variant, in generation order.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Update,
        Self::Upsert,
        Self::Response,
        Self::Query
    ];

    /// Name of the variant type for `source`.
    pub fn type_name(self, source: &Ident) -> Ident {
        match self {
            Self::Create => quote::format_ident!("Create{}Request", source),
            Self::Update => quote::format_ident!("Update{}Request", source),
            Self::Upsert => quote::format_ident!("Upsert{}Request", source),
            Self::Response => quote::format_ident!("{}Response", source),
            Self::Query => quote::format_ident!("{}Query", source)
        }
    }

    /// Short description used in generated docs.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Create => "Request payload for creating",
            Self::Update => "Request payload for updating",
            Self::Upsert => "Request payload for creating or updating",
            Self::Response => "Response representation of",
            Self::Query => "Optional filter over"
        }
    }
}

/// Parsed `#[facet_dtos(...)]`.
#[derive(Debug, Default, Clone, FromMeta)]
pub struct DtoAttrs {
    /// Generate `Create{S}Request`.
    #[darling(default)]
    pub create: bool,

    /// Generate `Update{S}Request`.
    #[darling(default)]
    pub update: bool,

    /// Generate `Upsert{S}Request`.
    #[darling(default)]
    pub upsert: bool,

    /// Generate `{S}Response`.
    #[darling(default)]
    pub response: bool,

    /// Generate `{S}Query`.
    #[darling(default)]
    pub query: bool,

    /// Members dropped from every variant.
    #[darling(default)]
    pub exclude: Option<PathList>,

    /// Facets for nested members.
    #[darling(default)]
    pub nested: Option<PathList>,

    /// Derives for every variant.
    #[darling(default)]
    pub derive: Option<PathList>,

    /// Collect restricted fields.
    #[darling(default)]
    pub include_fields: bool,

    /// Copy field attributes.
    #[darling(default)]
    pub copy_attributes: bool
}

impl DtoAttrs {
    /// Parse the attribute, accepting the bare `#[facet_dtos]` form.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or malformed arguments.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            meta => Self::from_meta(meta)
        }
    }

    /// Requested variants; none requested means all of them.
    pub fn variants(&self) -> Vec<CrudVariant> {
        let requested: Vec<CrudVariant> = CrudVariant::ALL
            .into_iter()
            .filter(|variant| match variant {
                CrudVariant::Create => self.create,
                CrudVariant::Update => self.update,
                CrudVariant::Upsert => self.upsert,
                CrudVariant::Response => self.response,
                CrudVariant::Query => self.query
            })
            .collect();
        if requested.is_empty() {
            CrudVariant::ALL.to_vec()
        } else {
            requested
        }
    }

    /// Member names excluded from every variant.
    pub fn excluded(&self) -> Vec<String> {
        self.exclude
            .iter()
            .flat_map(|list| list.iter())
            .filter_map(|path| path.get_ident().map(ToString::to_string))
            .collect()
    }

    /// Facet names for nested members.
    pub fn nested(&self) -> Vec<Ident> {
        self.nested.as_ref().map(type_names).unwrap_or_default()
    }

    /// Derives for every variant, without `Default`.
    ///
    /// Variants always receive a generated `impl Default`.
    pub fn derives(&self) -> Vec<Path> {
        match &self.derive {
            Some(list) => list
                .iter()
                .filter(|path| !path.is_ident("Default"))
                .cloned()
                .collect(),
            None => vec![syn::parse_quote!(Debug), syn::parse_quote!(Clone)]
        }
    }
}
