// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member resolution.
//!
//! Turns one target declaration into a [`FacetTargetModel`]:
//!
//! 1. inspect the source (members in walk order, layout)
//! 2. filter by include/exclude list, identity policy and hand-written
//!    target fields; dropped required members are kept aside for the
//!    reverse mapper
//! 3. detect nested facet mappings
//! 4. apply nullable wrapping (nested members only under the query overlay)
//! 5. copy decorations for the destination slot
//!
//! A hand-written named field of the target wins over a source member of
//! the same name; the source member is then treated as excluded.

use indexmap::IndexSet;
use syn::{Attribute, DeriveInput, Field, Generics, Ident, ItemStruct, Path, Visibility};

use crate::{
    artifact,
    copy::{Slot, copy_decorations},
    error::ResolveError,
    inspect::inspect,
    model::{FacetKind, FacetTargetModel, ResolvedMember},
    nested::{FacetRegistry, detect, facet_type},
    parse::{FacetAttrs, FacetSpecification, IdentityPolicy, NullablePolicy},
    shape::{TargetShape, infer},
    symbols::SymbolTable,
    utils::types::{is_option, wrap_option}
};

/// A target declaration, written by hand or synthesized for a CRUD variant.
#[derive(Debug, Clone)]
pub struct TargetDecl {
    /// Target name.
    pub ident:       Ident,
    /// Target visibility.
    pub vis:         Visibility,
    /// Outer attributes re-emitted on the facet, generator attributes removed.
    pub attrs:       Vec<Attribute>,
    /// Declared generics.
    pub generics:    Generics,
    /// Declared kind.
    pub kind:        FacetKind,
    /// Hand-written fields, generator attributes removed.
    pub user_fields: Vec<Field>,
    /// Normalized configuration.
    pub spec:        FacetSpecification
}

impl TargetDecl {
    /// Parse a `#[facet(...)]` struct.
    ///
    /// # Errors
    ///
    /// Returns the attribute errors of the declaration.
    pub fn from_item(item: &ItemStruct) -> darling::Result<Self> {
        use darling::FromDeriveInput;

        let input = DeriveInput::from(item.clone());
        let attrs = FacetAttrs::from_derive_input(&input)?;
        let kind = FacetKind::from_fields(&item.fields, attrs.record);
        let spec = FacetSpecification::from_attrs(&attrs, kind)?;

        let mut stripped = item.clone();
        crate::parse::strip_generator_attrs(&mut stripped);
        Ok(Self {
            ident: stripped.ident,
            vis: stripped.vis,
            attrs: stripped.attrs,
            generics: stripped.generics,
            kind,
            user_fields: stripped.fields.into_iter().collect(),
            spec
        })
    }
}

/// Module-wide inputs of resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'c, 'a> {
    /// Module symbol table.
    pub table:       &'c SymbolTable<'a>,
    /// Frozen facet registry.
    pub registry:    &'c FacetRegistry,
    /// Runtime crate path.
    pub runtime:     &'c Path,
    /// Module path, for qualified file names.
    pub module_path: &'c [String]
}

/// Resolve one target.
///
/// # Errors
///
/// Fails when the target is generic or its source cannot be inspected.
pub fn resolve_target(
    decl: &TargetDecl,
    cx: &ResolveContext<'_, '_>
) -> Result<FacetTargetModel, ResolveError> {
    if !decl.generics.params.is_empty() {
        return Err(ResolveError::GenericTarget {
            target: decl.ident.to_string()
        });
    }
    let spec = &decl.spec;
    let options = &spec.options;
    let source = inspect(&spec.source.to_string(), cx.table, options.include_fields)?;
    let nested = cx.registry.lookup(&decl.ident, &spec.nested);

    let user_names: IndexSet<String> = decl
        .user_fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();
    let slot = if decl.kind.is_positional() {
        Slot::Positional
    } else {
        Slot::Named
    };

    let mut members = Vec::new();
    let mut excluded_required = Vec::new();
    for member in source.members.values() {
        let hand_written = user_names.contains(&member.name);
        if hand_written {
            tracing::debug!(
                facet = %decl.ident,
                member = %member.name,
                "hand-written field shadows source member"
            );
        }
        let dropped_identity = member.identity && options.identity == IdentityPolicy::Drop;
        if hand_written || dropped_identity || !spec.filter.keeps(&member.name) {
            if member.required {
                excluded_required.push(member.clone());
            }
            continue;
        }

        let mapping = detect(&member.ty, &nested);
        let wrap = match &mapping {
            Some(_) => options.nullable == NullablePolicy::Everything,
            None => {
                options.nullable != NullablePolicy::Keep
                    || (member.identity && options.identity == IdentityPolicy::Optional)
            }
        };
        let declared = mapping.as_ref().map_or_else(|| member.ty.clone(), facet_type);
        let nullable_wrapped = wrap && !is_option(&declared);
        let ty = if nullable_wrapped {
            wrap_option(&declared)
        } else {
            declared
        };

        members.push(ResolvedMember {
            source: member.clone(),
            ty,
            nested: mapping,
            nullable_wrapped,
            init_only: member.is_init_only() && options.preserve_init_only,
            required: member.required && options.preserve_required && !options.strip_required,
            decorations: if options.copy_attributes {
                copy_decorations(&member.attrs, slot)
            } else {
                Vec::new()
            }
        });
    }

    let shape = infer(
        TargetShape {
            ident:            &decl.ident,
            kind:             decl.kind,
            user_field_count: decl.user_fields.len(),
            attrs:            &decl.attrs
        },
        cx.table,
        &source.layout
    );

    tracing::debug!(
        facet = %decl.ident,
        source = %spec.source,
        members = members.len(),
        excluded_required = excluded_required.len(),
        "resolved facet"
    );

    Ok(FacetTargetModel {
        ident: decl.ident.clone(),
        vis: decl.vis.clone(),
        attrs: decl.attrs.clone(),
        kind: decl.kind,
        user_fields: decl.user_fields.clone(),
        source: spec.source.clone(),
        members,
        excluded_required,
        layout: source.layout,
        hook: spec.hook.clone(),
        options: options.clone(),
        shape,
        runtime: cx.runtime.clone(),
        file_name: artifact::file_name(&decl.ident, cx.module_path, options.qualified_file_name)
    })
}

#[cfg(test)]
mod tests;
