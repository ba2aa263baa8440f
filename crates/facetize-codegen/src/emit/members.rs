// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member declaration, member constants and init-only getters.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! pub struct UserDto {
//!     /// Display name.
//!     pub name: String,
//!     id: i64
//! }
//!
//! impl UserDto {
//!     pub const MEMBERS: &'static [&'static str] = &["name", "id"];
//!     pub const REQUIRED_MEMBERS: &'static [&'static str] = &["id"];
//!
//!     pub fn id(&self) -> &i64 { &self.id }
//! }
//! ```
//!
//! Preserved init-only members are private and read through a getter, so
//! they cannot change after construction.

use proc_macro2::TokenStream;
use quote::quote;

use super::plan::{EmissionPlan, MemberLayout};
use crate::{
    model::{FacetTargetModel, ResolvedMember},
    utils::docs::doc_attrs
};

/// Names of generated inherent fns a getter must not collide with.
const RESERVED: &[&str] = &["new", "from_source", "projection", "back_to"];

fn member_field(member: &ResolvedMember, positional: bool) -> TokenStream {
    let docs = doc_attrs(member.source.doc.as_deref());
    let decorations = &member.decorations;
    let vis = if member.init_only {
        TokenStream::new()
    } else {
        let vis = &member.source.vis;
        quote! { #vis }
    };
    let ty = &member.ty;
    if positional {
        quote! { #docs #(#decorations)* #vis #ty }
    } else {
        let ident = member.ident();
        quote! { #docs #(#decorations)* #vis #ident: #ty }
    }
}

/// The facet declaration with hand-written and generated members.
pub fn declaration(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let attrs = &model.attrs;
    let vis = &model.vis;
    let ident = &model.ident;
    let user = &model.user_fields;
    match plan.layout {
        MemberLayout::Named => {
            let members = model.members.iter().map(|member| member_field(member, false));
            quote! {
                #(#attrs)*
                #vis struct #ident {
                    #(#user,)*
                    #(#members),*
                }
            }
        }
        MemberLayout::Positional | MemberLayout::PositionalAppended => {
            let members = model.members.iter().map(|member| member_field(member, true));
            quote! {
                #(#attrs)*
                #vis struct #ident(
                    #(#user,)*
                    #(#members),*
                );
            }
        }
    }
}

/// String array literal of member names.
pub fn names<'m>(members: impl Iterator<Item = &'m ResolvedMember>) -> TokenStream {
    let names = members.map(ResolvedMember::name);
    quote! { &[#(#names),*] }
}

/// `MEMBERS` and `REQUIRED_MEMBERS`.
pub fn constants(model: &FacetTargetModel) -> TokenStream {
    let all = names(model.members.iter());
    let required = names(model.members.iter().filter(|member| member.required));
    quote! {
        /// Source members carried by this facet, in member order.
        pub const MEMBERS: &'static [&'static str] = #all;

        /// Carried members that must be supplied when building the facet.
        pub const REQUIRED_MEMBERS: &'static [&'static str] = #required;
    }
}

/// Getters for preserved init-only members.
pub fn getters(model: &FacetTargetModel) -> TokenStream {
    let getters = model
        .members
        .iter()
        .enumerate()
        .filter(|(_, member)| member.init_only)
        .filter(|(_, member)| {
            !RESERVED.contains(&member.name()) && !model.shape.user_fns.contains(member.name())
        })
        .map(|(position, member)| {
            let ident = member.ident();
            let vis = &member.source.vis;
            let ty = &member.ty;
            let docs = doc_attrs(member.source.doc.as_deref());
            let field = if model.kind.is_positional() {
                let index = model.positional_index(position);
                quote! { #index }
            } else {
                quote! { #ident }
            };
            quote! {
                #docs
                #vis fn #ident(&self) -> &#ty {
                    &self.#field
                }
            }
        });
    quote! { #(#getters)* }
}
