// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reusable projection.
//!
//! ```rust,ignore
//! pub fn projection() -> facetize::Projection<User, UserDto> {
//!     facetize::Projection::new(Self::MEMBERS, |source: &User| -> Self {
//!         Self { id: source.id.clone() }
//!     })
//! }
//! ```
//!
//! The closure captures nothing, so it coerces to the plain function pointer
//! a query layer can store and call.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    forward::{Form, initializer, values},
    plan::{EmissionPlan, ProjectionMode}
};
use crate::model::FacetTargetModel;

/// `projection()` returning a `Projection` value.
pub fn generate(model: &FacetTargetModel, plan: &EmissionPlan) -> TokenStream {
    let form = match plan.projection {
        ProjectionMode::Omitted => return TokenStream::new(),
        ProjectionMode::Positional => Form::Call,
        ProjectionMode::Initializer => Form::Braced
    };
    let runtime = &model.runtime;
    let source = &model.source;
    let init = initializer(model, &values(model), form);
    let doc = format!(
        " Reusable projection from [`{}`] to [`{}`].",
        model.source, model.ident
    );
    quote! {
        #[doc = #doc]
        pub fn projection() -> #runtime::Projection<#source, Self> {
            #runtime::Projection::new(Self::MEMBERS, |source: &#source| -> Self { #init })
        }
    }
}
