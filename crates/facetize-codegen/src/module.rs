// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Batch orchestration for one `#[facets]` module.
//!
//! # Pipeline
//!
//! ```text
//! ItemMod
//!   │ SymbolTable::from_items         structs, inherent fns, trait impls
//!   │ FieldAttrs::validate            field markers, errors accumulated
//!   │ TargetDecl::from_item           #[facet(..)] targets
//!   │ crud::variant_decls             #[facet_dtos(..)] variants
//!   │ FacetRegistry (frozen)          targets and variants usable as nested facets
//!   ▼
//! per target: resolve_target → emit   faults skip the target only
//!   ▼
//! Expansion { module, artifacts, errors }
//! ```
//!
//! Items keep their position in the module. CRUD variants follow their
//! source struct. Generator attributes are removed from every struct that is
//! re-emitted, generated or not.

use darling::error::Accumulator;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Item, ItemMod, ItemStruct, Path};

use crate::{
    artifact::GeneratedArtifact,
    crud,
    emit::{emit, plan_for},
    nested::FacetRegistry,
    parse::{DtoAttrs, FieldAttrs, dtos_attr, is_target, strip_generator_attrs},
    resolve::{ResolveContext, TargetDecl, resolve_target},
    symbols::SymbolTable
};

/// Result of expanding one module.
#[derive(Debug)]
pub struct Expansion {
    /// The module with generated items in place.
    pub module:    ItemMod,
    /// One artifact per generated facet.
    pub artifacts: Vec<GeneratedArtifact>,
    /// Attribute errors of the module.
    pub errors:    Option<darling::Error>
}

impl Expansion {
    /// The module followed by its compile errors.
    pub fn into_tokens(self) -> TokenStream {
        let module = self.module.into_token_stream();
        let errors = self.errors.map(darling::Error::write_errors);
        quote! {
            #module
            #errors
        }
    }
}

/// What a struct of the module expands into.
enum Planned {
    /// Target declaration; `None` when its attributes failed to parse.
    Target(Option<TargetDecl>),
    /// CRUD source followed by its variants.
    CrudSource(Vec<TargetDecl>),
    /// Any other struct.
    Plain
}

/// One `#[facets]` module being expanded.
#[derive(Debug, Clone, Copy)]
pub struct FacetModule<'p> {
    /// Runtime crate path.
    pub runtime:     &'p Path,
    /// Module path, outermost first.
    pub module_path: &'p [String]
}

impl FacetModule<'_> {
    /// Expand the module.
    ///
    /// A module without inline content is returned unchanged.
    pub fn expand(&self, mut module: ItemMod) -> Expansion {
        let Some((brace, items)) = module.content.take() else {
            return Expansion {
                module,
                artifacts: Vec::new(),
                errors: None
            };
        };

        let mut errors = darling::Error::accumulator();
        let plans: Vec<Option<Planned>> = items
            .iter()
            .map(|item| match item {
                Item::Struct(item) => Some(plan_struct(item, &mut errors)),
                _ => None
            })
            .collect();

        let table = SymbolTable::from_items(&items);
        let empty = FacetRegistry::default();
        let standalone = ResolveContext {
            table:       &table,
            registry:    &empty,
            runtime:     self.runtime,
            module_path: self.module_path
        };

        let mut registry = FacetRegistry::builder();
        for plan in plans.iter().flatten() {
            let decls: &[TargetDecl] = match plan {
                Planned::Target(Some(decl)) => std::slice::from_ref(decl),
                Planned::CrudSource(decls) => decls,
                _ => &[]
            };
            for decl in decls.iter().filter(|decl| nestable(decl, &standalone)) {
                registry.register(&decl.ident, &decl.spec.source);
            }
        }
        let registry = registry.build();

        let cx = ResolveContext {
            registry: &registry,
            ..standalone
        };

        let mut output = Vec::with_capacity(items.len());
        let mut artifacts = Vec::new();
        for (item, plan) in items.iter().zip(&plans) {
            let (Item::Struct(item), Some(plan)) = (item, plan) else {
                output.push(item.clone());
                continue;
            };
            match plan {
                Planned::Target(Some(decl)) => match generate(decl, &cx) {
                    Some(artifact) => {
                        output.push(Item::Verbatim(artifact.tokens.clone()));
                        artifacts.push(artifact);
                    }
                    None => output.push(Item::Struct(stripped(item)))
                },
                Planned::CrudSource(decls) => {
                    output.push(Item::Struct(stripped(item)));
                    for artifact in decls.iter().filter_map(|decl| generate(decl, &cx)) {
                        output.push(Item::Verbatim(artifact.tokens.clone()));
                        artifacts.push(artifact);
                    }
                }
                Planned::Target(None) | Planned::Plain => output.push(Item::Struct(stripped(item)))
            }
        }

        module.content = Some((brace, output));
        Expansion {
            module,
            artifacts,
            errors: errors.finish().err()
        }
    }
}

fn plan_struct(item: &ItemStruct, errors: &mut Accumulator) -> Planned {
    for field in &item.fields {
        errors.handle(FieldAttrs::validate(field));
    }
    if is_target(item) {
        return Planned::Target(errors.handle(TargetDecl::from_item(item)));
    }
    if let Some(attr) = dtos_attr(item) {
        return match errors.handle(DtoAttrs::from_attr(attr)) {
            Some(dtos) => Planned::CrudSource(crud::variant_decls(item, &dtos)),
            None => Planned::Plain
        };
    }
    Planned::Plain
}

fn stripped(item: &ItemStruct) -> ItemStruct {
    let mut item = item.clone();
    strip_generator_attrs(&mut item);
    item
}

/// Whether other facets of the batch may map members through `decl`.
///
/// The facet must resolve on its own and expose both `Facet::project` and
/// `back_to`, generated or hand-written. Its own nested references do not
/// matter here, so they are left out of this resolution.
fn nestable(decl: &TargetDecl, cx: &ResolveContext<'_, '_>) -> bool {
    let mut standalone = decl.clone();
    standalone.spec.nested.clear();
    let Ok(model) = resolve_target(&standalone, cx) else {
        tracing::debug!(facet = %decl.ident, "unresolvable facet is not used for nested members");
        return false;
    };
    let plan = plan_for(&model);
    let projects = plan.facet_impl.is_some() || model.shape.user_has_facet_impl;
    let reverses = plan.reverse || model.shape.user_fns.contains("back_to");
    if !(projects && reverses) {
        tracing::debug!(
            facet = %decl.ident,
            projects,
            reverses,
            "facet without projection or reverse mapping is not used for nested members"
        );
    }
    projects && reverses
}

/// Resolve and emit one target; faults are logged and skip the target.
fn generate(decl: &TargetDecl, cx: &ResolveContext<'_, '_>) -> Option<GeneratedArtifact> {
    match resolve_target(decl, cx) {
        Ok(model) => Some(GeneratedArtifact {
            type_name: model.ident.to_string(),
            file_name: model.file_name.clone(),
            tokens:    emit(&model)
        }),
        Err(err) => {
            tracing::warn!(facet = %decl.ident, error = %err, "skipping facet");
            None
        }
    }
}
