// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shape inference.
//!
//! Structural facts about a target and its source that decide which
//! emitters may run.
//!
//! | Fact | Detected from |
//! |------|---------------|
//! | existing constructor | tuple target with hand-written fields, or `fn new` on the target |
//! | hand-written `from_source` | inherent fn of the target |
//! | hand-written `Default` | `impl Default` or `#[derive(Default)]` on the target |
//! | hand-written conversions | `impl From<S>` / `impl From<&S>` of the source `S`, or `impl Facet`, for the target |
//! | source positional constructor | inherent `fn new(..) -> Self` on the source whose parameters all name source fields of the same declared type |

use indexmap::{IndexMap, IndexSet};
use quote::ToTokens;
use syn::{
    Attribute, FnArg, Ident, Pat, Path, ReturnType, Token, Type, punctuated::Punctuated
};

use crate::{
    model::{FacetKind, SlotContent, SourceLayout},
    symbols::SymbolTable,
    utils::types::bare_ident
};

/// Positional constructor of a source struct.
#[derive(Debug, Clone)]
pub struct SourceConstructor {
    /// Parameters in call order; names and types match source fields.
    pub params: Vec<(Ident, Type)>
}

/// Structural facts about one target.
#[derive(Debug, Clone, Default)]
pub struct ShapeInfo {
    /// The target already owns its constructor.
    pub existing_ctor:        bool,
    /// The user wrote `from_source`.
    pub user_has_from_source: bool,
    /// The user wrote or derived `Default`.
    pub user_has_default:     bool,
    /// The user wrote `From<S>` or `From<&S>` for the target.
    pub user_has_conversions: bool,
    /// The user implemented `Facet` for the target.
    pub user_has_facet_impl:  bool,
    /// Names of every hand-written inherent fn of the target.
    pub user_fns:             IndexSet<String>,
    /// Positional constructor of the source.
    pub source_ctor:          Option<SourceConstructor>
}

/// Target declaration facts needed for inference.
#[derive(Debug, Clone, Copy)]
pub struct TargetShape<'d> {
    /// Target name.
    pub ident:            &'d Ident,
    /// Target kind.
    pub kind:             FacetKind,
    /// Number of hand-written fields.
    pub user_field_count: usize,
    /// Outer attributes of the declaration.
    pub attrs:            &'d [Attribute]
}

/// Whether `#[derive(..)]` lists `name`.
fn derives(attrs: &[Attribute], name: &str) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| {
            path.segments
                .last()
                .is_some_and(|segment| segment.ident == name)
        })
}

/// Leaf fields of a layout with their rendered types, bases included.
fn leaf_fields(layout: &SourceLayout, fields: &mut IndexMap<String, String>) {
    for slot in &layout.slots {
        match &slot.content {
            SlotContent::Base(base) => leaf_fields(base, fields),
            _ => {
                fields
                    .entry(slot.ident.to_string())
                    .or_insert_with(|| slot.ty.to_token_stream().to_string());
            }
        }
    }
}

/// Detect the positional constructor of the source.
pub fn source_constructor(table: &SymbolTable<'_>, layout: &SourceLayout) -> Option<SourceConstructor> {
    let source = layout.ident.to_string();
    let func = table.inherent_fn(&source, "new")?;
    if !func.sig.generics.params.is_empty() {
        return None;
    }
    let returns_source = match &func.sig.output {
        ReturnType::Type(_, ty) => bare_ident(ty).is_some_and(|ident| ident == "Self" || ident == &source),
        ReturnType::Default => false
    };
    if !returns_source {
        return None;
    }

    let mut fields = IndexMap::new();
    leaf_fields(layout, &mut fields);

    let mut params = Vec::with_capacity(func.sig.inputs.len());
    for input in &func.sig.inputs {
        let FnArg::Typed(typed) = input else {
            return None;
        };
        let Pat::Ident(pat) = typed.pat.as_ref() else {
            return None;
        };
        let declared = fields.get(&pat.ident.to_string())?;
        if *declared != typed.ty.to_token_stream().to_string() {
            return None;
        }
        params.push((pat.ident.clone(), typed.ty.as_ref().clone()));
    }
    Some(SourceConstructor {
        params
    })
}

/// Infer the structural facts of a target.
pub fn infer(target: TargetShape<'_>, table: &SymbolTable<'_>, layout: &SourceLayout) -> ShapeInfo {
    let name = target.ident.to_string();
    let user_fns = table.inherent_fn_names(&name);
    let existing_ctor = (target.kind == FacetKind::Tuple && target.user_field_count > 0)
        || user_fns.contains("new");

    ShapeInfo {
        existing_ctor,
        user_has_from_source: user_fns.contains("from_source"),
        user_has_default: table.implements(&name, "Default") || derives(target.attrs, "Default"),
        user_has_conversions: table.converts_from(&name, &layout.ident.to_string()),
        user_has_facet_impl: table.implements(&name, "Facet"),
        user_fns,
        source_ctor: source_constructor(table, layout)
    }
}
