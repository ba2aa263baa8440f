// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Nested facet lookup.
//!
//! A member whose type is the source of another facet can be mapped through
//! that facet. The lookup runs in two stages:
//!
//! ```text
//! FacetRegistry          facet name → source name, whole module, frozen
//!   │ lookup(nested(..))
//!   ▼
//! NestedMap              source name → facet, per target
//!   │ detect(member type)
//!   ▼
//! NestedMapping          facet + wrapper shape
//! ```
//!
//! The registry is built from every target declaration and CRUD variant
//! before any target is resolved, so every target sees the same set of
//! facets regardless of declaration order.
//!
//! # Recognized shapes
//!
//! | Member type | Shape | Facet type |
//! |-------------|-------|------------|
//! | `Vec<S>` | list | `Vec<F>` |
//! | `[S; N]` | array | `[F; N]` |
//! | `VecDeque<S>`, `LinkedList<S>`, `Box<[S]>`, `Rc<[S]>`, `Arc<[S]>` | sequence | `Vec<F>` |
//! | `Option<S>` | optional | `Option<F>` |
//! | `S` | scalar | `F` |
//!
//! Any other type, custom collections included, is mapped directly.

use indexmap::IndexMap;
use syn::{Ident, Type};

use crate::{
    model::{CollectionShape, NestedMapping, NestedShape, SequenceKind},
    utils::types::{bare_ident, option_inner, peel, single_type_arg}
};

/// Facet name to source name, for every facet of a module.
#[derive(Debug, Clone, Default)]
pub struct FacetRegistry {
    facets: IndexMap<String, Ident>
}

/// Builder for a [`FacetRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    facets: IndexMap<String, Ident>
}

impl RegistryBuilder {
    /// Register a facet; the first registration of a name wins.
    pub fn register(&mut self, facet: &Ident, source: &Ident) {
        self.facets
            .entry(facet.to_string())
            .or_insert_with(|| source.clone());
    }

    /// Freeze the registry.
    pub fn build(self) -> FacetRegistry {
        FacetRegistry {
            facets: self.facets
        }
    }
}

/// Source name to facet, for one target.
pub type NestedMap = IndexMap<String, Ident>;

impl FacetRegistry {
    /// Start a new registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Source of a registered facet.
    pub fn source_of(&self, facet: &str) -> Option<&Ident> {
        self.facets.get(facet)
    }

    /// Resolve nested references of one target into a map keyed by source.
    ///
    /// Unknown references are skipped; members of that type fall back to
    /// direct mapping. When two facets share a source the first one wins.
    pub fn lookup(&self, target: &Ident, nested: &[Ident]) -> NestedMap {
        let mut map = NestedMap::new();
        for facet in nested {
            match self.source_of(&facet.to_string()) {
                Some(source) => {
                    map.entry(source.to_string())
                        .or_insert_with(|| facet.clone());
                }
                None => tracing::warn!(
                    facet = %target,
                    nested = %facet,
                    "nested facet reference does not resolve, mapping directly"
                )
            }
        }
        map
    }
}

fn known<'m>(ty: &Type, map: &'m NestedMap) -> Option<(&'m Ident, Ident)> {
    let ident = bare_ident(ty)?;
    map.get(&ident.to_string())
        .map(|facet| (facet, ident.clone()))
}

fn sequence_kind(name: &str, element: &Type) -> Option<(SequenceKind, Type)> {
    let kind = match name {
        "VecDeque" => return Some((SequenceKind::VecDeque, element.clone())),
        "LinkedList" => return Some((SequenceKind::LinkedList, element.clone())),
        "Box" => SequenceKind::BoxedSlice,
        "Rc" => SequenceKind::RcSlice,
        "Arc" => SequenceKind::ArcSlice,
        _ => return None
    };
    match peel(element) {
        Type::Slice(slice) => Some((kind, slice.elem.as_ref().clone())),
        _ => None
    }
}

fn collection(ty: &Type, map: &NestedMap) -> Option<NestedMapping> {
    if let Type::Array(array) = peel(ty) {
        let (facet, source) = known(&array.elem, map)?;
        return Some(NestedMapping {
            facet: facet.clone(),
            source,
            shape: NestedShape::Collection(CollectionShape::Array(array.len.clone()))
        });
    }
    let (name, element) = single_type_arg(ty)?;
    let (shape, element) = if name == "Vec" {
        (CollectionShape::List, element.clone())
    } else {
        let (kind, element) = sequence_kind(&name, element)?;
        (CollectionShape::Sequence(kind), element)
    };
    let (facet, source) = known(&element, map)?;
    Some(NestedMapping {
        facet: facet.clone(),
        source,
        shape: NestedShape::Collection(shape)
    })
}

/// Nested mapping of a member type, if it maps through a facet.
///
/// Collections are checked first, then `Option<S>`, then `S` itself.
pub fn detect(ty: &Type, map: &NestedMap) -> Option<NestedMapping> {
    if map.is_empty() {
        return None;
    }
    if let Some(mapping) = collection(ty, map) {
        return Some(mapping);
    }
    if let Some(inner) = option_inner(ty) {
        let (facet, source) = known(inner, map)?;
        return Some(NestedMapping {
            facet: facet.clone(),
            source,
            shape: NestedShape::Optional
        });
    }
    let (facet, source) = known(ty, map)?;
    Some(NestedMapping {
        facet: facet.clone(),
        source,
        shape: NestedShape::Scalar
    })
}

/// Facet member type for a nested mapping.
///
/// Sequences normalize to `Vec<F>`.
pub fn facet_type(mapping: &NestedMapping) -> Type {
    let facet = &mapping.facet;
    match &mapping.shape {
        NestedShape::Scalar => syn::parse_quote!(#facet),
        NestedShape::Optional => syn::parse_quote!(::core::option::Option<#facet>),
        NestedShape::Collection(CollectionShape::Array(len)) => syn::parse_quote!([#facet; #len]),
        NestedShape::Collection(_) => syn::parse_quote!(::std::vec::Vec<#facet>)
    }
}
