// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source → facet construction.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl UserDto {
//!     pub fn new(source: &User) -> Self {
//!         let mut target = Self {
//!             id:   source.id.clone(),
//!             name: source.name.clone()
//!         };
//!         <UserMapper as facetize::FacetConfiguration<User, Self>>::map(source, &mut target);
//!         target
//!     }
//!
//!     pub fn from_source(source: &User) -> Self { .. }
//! }
//! ```
//!
//! Values read a member through its access path, so members of flattened
//! bases become `source.base.id`. Nested members go through
//! `Facet::project` of the nested facet.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::plan::{EmissionPlan, FactoryMode, ForwardMode};
use crate::model::{CollectionShape, FacetTargetModel, NestedShape, ResolvedMember};

/// Expression reading one member from `source`.
pub fn value(member: &ResolvedMember, runtime: &syn::Path) -> TokenStream {
    let path = &member.source.path;
    let access = quote! { source #(.#path)* };
    let Some(nested) = &member.nested else {
        return if member.nullable_wrapped {
            quote! { ::core::option::Option::Some(#access.clone()) }
        } else {
            quote! { #access.clone() }
        };
    };
    let facet = &nested.facet;
    let project = quote! { <#facet as #runtime::Facet>::project };
    let projected = match &nested.shape {
        NestedShape::Scalar => quote! { #project(&#access) },
        NestedShape::Optional => quote! { #access.as_ref().map(#project) },
        NestedShape::Collection(CollectionShape::Array(_)) => {
            quote! { #access.each_ref().map(#project) }
        }
        NestedShape::Collection(_) => quote! { #access.iter().map(#project).collect() }
    };
    if member.nullable_wrapped {
        quote! { ::core::option::Option::Some(#projected) }
    } else {
        projected
    }
}

/// Form of a positional initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `Self(a, b)`.
    Call,
    /// `Self { 0: a, 1: b }`.
    Braced
}

/// `Self` initializer with the given member values.
///
/// Hand-written fields take their default value.
pub fn initializer(model: &FacetTargetModel, values: &[TokenStream], form: Form) -> TokenStream {
    let filler = quote! { ::core::default::Default::default() };
    if model.kind.is_positional() {
        let all: Vec<TokenStream> = model
            .user_fields
            .iter()
            .map(|_| filler.clone())
            .chain(values.iter().cloned())
            .collect();
        return match form {
            Form::Call => quote! { Self(#(#all),*) },
            Form::Braced => {
                let indices = (0..all.len()).map(syn::Index::from);
                quote! { Self { #(#indices: #all),* } }
            }
        };
    }
    let user = model
        .user_fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .map(|ident| quote! { #ident: #filler });
    let names = model.members.iter().map(ResolvedMember::ident);
    quote! { Self { #(#user,)* #(#names: #values),* } }
}

/// Member values read from `source`, in member order.
pub fn values(model: &FacetTargetModel) -> Vec<TokenStream> {
    model
        .members
        .iter()
        .map(|member| value(member, &model.runtime))
        .collect()
}

fn source_doc(model: &FacetTargetModel, lead: &str) -> String {
    format!(" {lead} [`{}`] from a borrowed [`{}`].", model.ident, model.source)
}

/// Forward constructor `new(&Source)`.
pub fn constructor(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let source = &model.source;
    let runtime = &model.runtime;
    let body = match plan.forward {
        ForwardMode::Omitted => return TokenStream::new(),
        ForwardMode::Fenced => {
            let message = format!(
                "`{0}` has init-only members and a custom configuration; build it with `{0}::from_source`",
                model.ident
            );
            quote! {
                let _ = source;
                ::core::panic!(#message)
            }
        }
        ForwardMode::Direct => {
            let init = initializer(model, &values(model), Form::Call);
            match &model.hook {
                Some(hook) => quote! {
                    let mut target = #init;
                    <#hook as #runtime::FacetConfiguration<#source, Self>>::map(source, &mut target);
                    target
                },
                None => init
            }
        }
    };
    let doc = source_doc(model, "Creates a");
    let panics = (plan.forward == ForwardMode::Fenced).then(|| {
        quote! {
            ///
            /// # Panics
            ///
            /// Always. Members of this facet are fixed at construction, so the
            /// configuration cannot adjust them afterwards; use `from_source`.
        }
    });
    quote! {
        #[doc = #doc]
        #panics
        pub fn new(source: &#source) -> Self {
            #body
        }
    }
}

/// Static factory `from_source(&Source)`.
pub fn factory(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let source = &model.source;
    let runtime = &model.runtime;
    let (doc, body) = match plan.factory {
        FactoryMode::Omitted => return TokenStream::new(),
        FactoryMode::Initializer => (
            source_doc(model, "Builds a fully initialized"),
            initializer(model, &values(model), Form::Braced)
        ),
        FactoryMode::Hook => {
            let Some(hook) = &model.hook else {
                return TokenStream::new();
            };
            (
                source_doc(model, "Builds a fully initialized"),
                quote! { <#hook as #runtime::FacetFactory<#source, Self>>::map_new(source) }
            )
        }
        FactoryMode::Stub => {
            let message = format!(
                "`{}` declares its own constructor; write `from_source` by hand",
                model.ident
            );
            (
                format!(
                    " Manual construction point for [`{}`].\n\n The facet declares its own constructor, so its members cannot be\n filled here. Define `from_source` on the facet to replace this stub.",
                    model.ident
                ),
                quote! {
                    let _ = source;
                    ::core::unimplemented!(#message)
                }
            )
        }
    };
    let doc = doc.lines().map(|line| line.to_token_stream());
    quote! {
        #(#[doc = #doc])*
        pub fn from_source(source: &#source) -> Self {
            #body
        }
    }
}
