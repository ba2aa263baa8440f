// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source member discovery.
//!
//! Collects the members a facet may project from its source struct, walking
//! `#[facet(flatten)]` bases recursively.
//!
//! # Walk order
//!
//! ```text
//! struct Entity { pub id: i64, pub name: String }
//! struct User {
//!     #[facet(flatten)]
//!     pub base: Entity,        ──► id, name(shadowed)   (after User's own fields)
//!     pub name: String,        ──► name
//!     pub email: String        ──► email
//! }
//!
//! members: name, email, id
//! ```
//!
//! The source's own fields come first, then each base in declaration
//! order. Members are collected into an ordered map that refuses
//! overwrites, so a name declared by the derived struct masks the base
//! member. A base already on the walk stack is ignored.
//!
//! # Visibility
//!
//! | Field | Collected |
//! |-------|-----------|
//! | `pub` | always |
//! | `pub(crate)`, `pub(super)`, `pub(in ..)` | with `include_fields` |
//! | private, `pub(self)` | never |

use indexmap::IndexMap;
use syn::{Field, Fields, Ident, ItemStruct, Visibility};

use crate::{
    error::ResolveError,
    model::{LayoutSlot, MemberDescriptor, MemberKind, SlotContent, SourceLayout},
    parse::FieldAttrs,
    symbols::SymbolTable,
    utils::{docs::extract_doc_comments, types::bare_ident}
};

/// Members and layout of one source struct.
#[derive(Debug, Clone)]
pub struct SourceMembers {
    /// Deduplicated members in walk order.
    pub members: IndexMap<String, MemberDescriptor>,
    /// Full layout for reconstruction.
    pub layout:  SourceLayout
}

/// Visibility class of a field.
fn member_kind(vis: &Visibility) -> Option<MemberKind> {
    match vis {
        Visibility::Public(_) => Some(MemberKind::Public),
        Visibility::Restricted(restricted) if restricted.path.is_ident("self") => None,
        Visibility::Restricted(_) => Some(MemberKind::Restricted),
        Visibility::Inherited => None
    }
}

struct Walker<'t, 'a> {
    table:              &'t SymbolTable<'a>,
    include_restricted: bool,
    members:            IndexMap<String, MemberDescriptor>,
    stack:              Vec<String>
}

impl Walker<'_, '_> {
    fn walk(&mut self, item: &ItemStruct, prefix: &[Ident]) -> Result<SourceLayout, ResolveError> {
        let Fields::Named(fields) = &item.fields else {
            return Err(ResolveError::UnsupportedSource {
                source_name: item.ident.to_string()
            });
        };
        if !item.generics.params.is_empty() {
            return Err(ResolveError::GenericSource {
                source_name: item.ident.to_string()
            });
        }
        self.stack.push(item.ident.to_string());

        let mut slots: Vec<LayoutSlot> = Vec::with_capacity(fields.named.len());
        let mut bases: Vec<(usize, &Field)> = Vec::new();

        for field in &fields.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let markers = FieldAttrs::of(field);
            let content = if markers.flatten {
                bases.push((slots.len(), field));
                SlotContent::Hidden
            } else {
                self.collect(field, &ident, &markers, prefix)
            };
            slots.push(LayoutSlot {
                ident,
                ty: field.ty.clone(),
                content
            });
        }

        for (index, field) in bases {
            let slot = &mut slots[index];
            let mut path = prefix.to_vec();
            path.push(slot.ident.clone());
            let base = bare_ident(&field.ty)
                .map(ToString::to_string)
                .ok_or_else(|| ResolveError::UnknownBase {
                    source_name: item.ident.to_string(),
                    field:       slot.ident.to_string()
                })?;
            if self.stack.contains(&base) {
                tracing::debug!(base = %base, "ignoring cyclic flatten base");
                continue;
            }
            let base_item =
                self.table
                    .struct_named(&base)
                    .ok_or_else(|| ResolveError::UnknownBase {
                        source_name: item.ident.to_string(),
                        field:       slot.ident.to_string()
                    })?;
            slot.content = SlotContent::Base(self.walk(base_item, &path)?);
        }

        self.stack.pop();
        Ok(SourceLayout {
            ident: item.ident.clone(),
            slots
        })
    }

    fn collect(
        &mut self,
        field: &Field,
        ident: &Ident,
        markers: &FieldAttrs,
        prefix: &[Ident]
    ) -> SlotContent {
        let Some(kind) = member_kind(&field.vis) else {
            return SlotContent::Hidden;
        };
        if kind == MemberKind::Restricted && !self.include_restricted {
            return SlotContent::Hidden;
        }
        let name = ident.to_string();
        if self.members.contains_key(&name) {
            return SlotContent::Hidden;
        }
        let mut path = prefix.to_vec();
        path.push(ident.clone());
        let descriptor = MemberDescriptor {
            name: name.clone(),
            ident: ident.clone(),
            path,
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            kind,
            init_only: markers.init_only,
            required: markers.required,
            readonly: markers.readonly && kind == MemberKind::Restricted,
            identity: markers.id || name == "id",
            doc: extract_doc_comments(&field.attrs),
            attrs: field.attrs.clone()
        };
        self.members.insert(name.clone(), descriptor);
        SlotContent::Member(name)
    }
}

/// Collect the members of source `source`.
///
/// # Errors
///
/// Fails when the source is missing, generic, not a named struct, or has a
/// flatten field that does not name a struct of the module.
pub fn inspect(
    source: &str,
    table: &SymbolTable<'_>,
    include_restricted: bool
) -> Result<SourceMembers, ResolveError> {
    let item = table
        .struct_named(source)
        .ok_or_else(|| ResolveError::SourceNotFound {
            source_name: source.to_string()
        })?;
    let mut walker = Walker {
        table,
        include_restricted,
        members: IndexMap::new(),
        stack: Vec::new()
    };
    let layout = walker.walk(item, &[])?;
    Ok(SourceMembers {
        members: walker.members,
        layout
    })
}
