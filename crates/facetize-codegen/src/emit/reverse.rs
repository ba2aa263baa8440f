// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Facet → source reconstruction.
//!
//! Two strategies, chosen by the source:
//!
//! | Source | Reconstruction |
//! |--------|----------------|
//! | positional `fn new(..)` | call it, then assign carried members it does not take |
//! | otherwise | struct literal over the full layout, bases rebuilt recursively |
//!
//! Every slot the facet does not carry gets the default literal of its
//! type, so the source is always fully initialized.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! pub fn back_to(&self) -> User {
//!     User {
//!         base:     Base { id: self.id.clone() },
//!         name:     self.name.clone(),
//!         password: ::std::string::String::new()
//!     }
//! }
//! ```

use indexmap::IndexSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{defaults::default_literal, plan::EmissionPlan};
use crate::model::{
    CollectionShape, FacetTargetModel, NestedShape, ResolvedMember, SlotContent, SourceLayout
};

/// Expression reading one member back from `self`.
fn value(model: &FacetTargetModel, position: usize, member: &ResolvedMember) -> TokenStream {
    let access = if model.kind.is_positional() {
        let index = model.positional_index(position);
        quote! { self.#index }
    } else {
        let ident = member.ident();
        quote! { self.#ident }
    };
    let Some(nested) = &member.nested else {
        return if member.nullable_wrapped {
            let fallback = default_literal(&member.source.ty);
            quote! { #access.clone().unwrap_or_else(|| #fallback) }
        } else {
            quote! { #access.clone() }
        };
    };
    let facet = &nested.facet;
    if member.nullable_wrapped {
        let fallback = default_literal(&member.source.ty);
        let value = quote! { value };
        let rebuilt = back_through(facet, &nested.shape, &value);
        return quote! { #access.as_ref().map(|value| #rebuilt).unwrap_or_else(|| #fallback) };
    }
    back_through(facet, &nested.shape, &access)
}

/// Nested facet value at `access` turned back into its source shape.
fn back_through(facet: &syn::Ident, shape: &NestedShape, access: &TokenStream) -> TokenStream {
    match shape {
        NestedShape::Scalar => quote! { #access.back_to() },
        NestedShape::Optional => quote! { #access.as_ref().map(#facet::back_to) },
        NestedShape::Collection(CollectionShape::Array(_)) => {
            quote! { #access.each_ref().map(#facet::back_to) }
        }
        NestedShape::Collection(_) => quote! { #access.iter().map(#facet::back_to).collect() }
    }
}

/// Value of a member by name, if the facet carries it.
fn carried(model: &FacetTargetModel, name: &str) -> Option<TokenStream> {
    model
        .members
        .iter()
        .position(|member| member.name() == name)
        .map(|position| value(model, position, &model.members[position]))
}

fn literal(model: &FacetTargetModel, layout: &SourceLayout) -> TokenStream {
    let ident = &layout.ident;
    let fields = layout.slots.iter().map(|slot| {
        let field = &slot.ident;
        let value = match &slot.content {
            SlotContent::Member(name) => {
                carried(model, name).unwrap_or_else(|| default_literal(&slot.ty))
            }
            SlotContent::Base(base) => literal(model, base),
            SlotContent::Hidden => default_literal(&slot.ty)
        };
        quote! { #field: #value }
    });
    quote! { #ident { #(#fields),* } }
}

fn through_constructor(model: &FacetTargetModel, params: &[(syn::Ident, syn::Type)]) -> TokenStream {
    let source = &model.source;
    let taken: IndexSet<String> = params.iter().map(|(name, _)| name.to_string()).collect();
    let args = params.iter().map(|(name, ty)| {
        carried(model, &name.to_string()).unwrap_or_else(|| default_literal(ty))
    });
    let assignments: Vec<TokenStream> = model
        .members
        .iter()
        .enumerate()
        .filter(|(_, member)| !taken.contains(member.name()))
        .map(|(position, member)| {
            let path = &member.source.path;
            let value = value(model, position, member);
            quote! { source #(.#path)* = #value; }
        })
        .collect();
    if assignments.is_empty() {
        return quote! { #source::new(#(#args),*) };
    }
    quote! {
        let mut source = #source::new(#(#args),*);
        #(#assignments)*
        source
    }
}

/// `back_to()` rebuilding the source.
pub fn generate(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    if !plan.reverse {
        return TokenStream::new();
    }
    let source = &model.source;
    let body = match &model.shape.source_ctor {
        Some(ctor) => through_constructor(model, &ctor.params),
        None => literal(model, &model.layout)
    };

    let mut doc = vec![
        format!(" Rebuilds a [`{source}`] from this facet."),
        String::new(),
        " Members the facet does not carry get default values.".to_string(),
    ];
    if !model.excluded_required.is_empty() {
        let names: Vec<String> = model
            .excluded_required
            .iter()
            .map(|member| format!("`{}`", member.name))
            .collect();
        doc.push(format!(
            " Required members reset this way: {}.",
            names.join(", ")
        ));
    }
    let doc = doc.iter().map(|line| line.to_token_stream());
    quote! {
        #(#[doc = #doc])*
        pub fn back_to(&self) -> #source {
            #body
        }
    }
}
