// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Trait impls: `Default`, `From`, `Facet` and `Reversible`.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl Default for UserDto { .. }
//! impl From<&User> for UserDto { fn from(source: &User) -> Self { Self::new(source) } }
//! impl From<User> for UserDto { fn from(source: User) -> Self { Self::new(&source) } }
//! impl facetize::Facet for UserDto { type Source = User; .. }
//! impl facetize::Reversible for UserDto { fn reverse(&self) -> User { self.back_to() } }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    defaults::default_literal,
    forward::{Form, initializer},
    members::names,
    plan::{Builder, EmissionPlan}
};
use crate::{model::FacetTargetModel, utils::marker};

fn call(builder: Builder, arg: TokenStream) -> TokenStream {
    match builder {
        Builder::New => quote! { Self::new(#arg) },
        Builder::FromSource => quote! { Self::from_source(#arg) }
    }
}

/// `impl Default` filling every member with its default literal.
pub fn parameterless(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    if !plan.parameterless {
        return TokenStream::new();
    }
    let ident = &model.ident;
    let values: Vec<TokenStream> = model
        .members
        .iter()
        .map(|member| default_literal(&member.ty))
        .collect();
    let init = initializer(model, &values, Form::Braced);
    let marker = marker::generated();
    quote! {
        #marker
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                #init
            }
        }
    }
}

/// `From<&Source>` and `From<Source>`.
pub fn from_impls(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let Some(builder) = plan.conversions else {
        return TokenStream::new();
    };
    let ident = &model.ident;
    let source = &model.source;
    let by_ref = call(builder, quote! { source });
    let by_value = call(builder, quote! { &source });
    let marker = marker::generated();
    quote! {
        #marker
        impl ::core::convert::From<&#source> for #ident {
            fn from(source: &#source) -> Self {
                #by_ref
            }
        }

        #marker
        impl ::core::convert::From<#source> for #ident {
            fn from(source: #source) -> Self {
                #by_value
            }
        }
    }
}

/// `Facet` and, with a reverse mapping, `Reversible`.
pub fn facet_impls(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let Some(builder) = plan.facet_impl else {
        return TokenStream::new();
    };
    let ident = &model.ident;
    let source = &model.source;
    let runtime = &model.runtime;
    let members = names(model.members.iter());
    let project = call(builder, quote! { source });
    let marker = marker::generated();
    let reversible = plan.reversible_impl.then(|| {
        quote! {
            #marker
            impl #runtime::Reversible for #ident {
                fn reverse(&self) -> #source {
                    self.back_to()
                }
            }
        }
    });
    quote! {
        #marker
        impl #runtime::Facet for #ident {
            type Source = #source;

            const MEMBERS: &'static [&'static str] = #members;

            fn project(source: &#source) -> Self {
                #project
            }
        }

        #reversible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        emit::plan_for,
        testing::{compact, resolve_one}
    };

    const USER: &str = r#"
        pub struct User {
            #[facet(init_only)]
            pub id: i64,
            pub name: String,
            pub nick: Option<String>,
        }
    "#;

    #[test]
    fn default_uses_default_literals() {
        let model = resolve_one(USER, "#[facet(source = \"User\")] pub struct UserDto;");
        let rendered = compact(&parameterless(&model, &plan_for(&model)));
        assert!(rendered.contains("impl::core::default::DefaultforUserDto"));
        assert!(rendered.contains("id:0i64"));
        assert!(rendered.contains("name:::std::string::String::new()"));
        assert!(rendered.contains("nick:::core::option::Option::None"));
    }

    #[test]
    fn derived_default_is_respected() {
        let model = resolve_one(
            USER,
            "#[derive(Default)] #[facet(source = \"User\")] pub struct UserDto;"
        );
        assert!(parameterless(&model, &plan_for(&model)).is_empty());
    }

    #[test]
    fn conversions_call_new() {
        let model = resolve_one(USER, "#[facet(source = \"User\")] pub struct UserDto;");
        let rendered = compact(&from_impls(&model, &plan_for(&model)));
        assert!(rendered.contains("impl::core::convert::From<&User>forUserDto"));
        assert!(rendered.contains("impl::core::convert::From<User>forUserDto"));
        assert!(rendered.contains("Self::new(&source)"));
    }

    #[test]
    fn init_only_conversions_call_factory() {
        let model = resolve_one(
            USER,
            "#[facet(source = \"User\", record, constructor = false)] pub struct UserRecord;"
        );
        let rendered = compact(&from_impls(&model, &plan_for(&model)));
        assert!(rendered.contains("Self::from_source(source)"));
    }

    #[test]
    fn facet_and_reversible_impls() {
        let model = resolve_one(
            USER,
            "#[facet(source = \"User\", exclude(nick))] pub struct UserDto;"
        );
        let rendered = compact(&facet_impls(&model, &plan_for(&model)));
        assert!(rendered.contains("impl::facetize::FacetforUserDto"));
        assert!(rendered.contains("typeSource=User;"));
        assert!(rendered.contains("constMEMBERS:&'static[&'staticstr]=&[\"id\",\"name\"];"));
        assert!(rendered.contains("impl::facetize::ReversibleforUserDto"));
        assert!(rendered.contains("self.back_to()"));
    }

    #[test]
    fn no_reversible_without_reverse() {
        let model = resolve_one(
            USER,
            "#[facet(source = \"User\", reverse = false)] pub struct UserDto;"
        );
        let rendered = compact(&facet_impls(&model, &plan_for(&model)));
        assert!(rendered.contains("Facet"));
        assert!(!rendered.contains("Reversible"));
    }

    #[test]
    fn hand_written_from_is_respected() {
        let src = format!(
            "{USER} impl From<&User> for UserDto {{ fn from(u: &User) -> Self {{ todo!() }} }}"
        );
        let model = resolve_one(&src, "#[facet(source = \"User\")] pub struct UserDto;");
        assert!(from_impls(&model, &plan_for(&model)).is_empty());
    }
}
