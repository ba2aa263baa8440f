// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code emission for one resolved facet.
//!
//! # Architecture
//!
//! ```text
//! emit.rs
//! ├── plan.rs         Shape dispatch (which sub-emitters run)
//! ├── members.rs      Declaration, MEMBERS constants, init-only getters
//! ├── forward.rs      new(&Source), from_source(&Source)
//! ├── projection.rs   projection() → Projection<Source, Facet>
//! ├── reverse.rs      back_to() → Source
//! ├── conversions.rs  Default, From, Facet, Reversible impls
//! └── defaults.rs     Default value literals
//! ```
//!
//! # Output Order
//!
//! 1. the facet declaration
//! 2. one inherent impl: constants, constructors, projection, reverse
//!    mapping, getters
//! 3. `Default`
//! 4. `From<&Source>` and `From<Source>`
//! 5. `Facet` and `Reversible`

mod conversions;
mod defaults;
mod forward;
mod members;
mod plan;
mod projection;
mod reverse;

pub use defaults::default_literal;
pub use plan::{
    Builder, EmissionPlan, FactoryMode, ForwardMode, MemberLayout, PlanInput, ProjectionMode
};
use proc_macro2::TokenStream;
use quote::quote;

use crate::{model::FacetTargetModel, utils::marker};

/// Plan input of a resolved facet.
pub fn plan_for(model: &FacetTargetModel) -> EmissionPlan {
    let shape = &model.shape;
    let options = &model.options;
    EmissionPlan::for_target(PlanInput {
        kind:                 model.kind,
        existing_ctor:        shape.existing_ctor,
        init_only_heavy:      model.is_init_only_heavy(),
        has_hook:             model.hook.is_some(),
        constructor:          options.constructor,
        default_constructor:  options.default_constructor,
        projection:           options.projection,
        reverse:              options.reverse,
        user_has_from_source: shape.user_has_from_source,
        user_has_default:     shape.user_has_default,
        user_has_projection:  shape.user_fns.contains("projection"),
        user_has_back_to:     shape.user_fns.contains("back_to"),
        user_has_conversions: shape.user_has_conversions,
        user_has_facet_impl:  shape.user_has_facet_impl
    })
}

/// Emit the declaration and every impl of one facet.
pub fn emit(model: &FacetTargetModel) -> TokenStream {
    let plan = plan_for(model);
    tracing::debug!(
        facet = %model.ident,
        layout = ?plan.layout,
        forward = ?plan.forward,
        factory = ?plan.factory,
        projection = ?plan.projection,
        reverse = plan.reverse,
        "emission plan"
    );

    let ident = &model.ident;
    let declaration = members::declaration(model, &plan);
    let constants = members::constants(model);
    let constructor = forward::constructor(model, &plan);
    let factory = forward::factory(model, &plan);
    let projection = projection::generate(model, &plan);
    let back_to = reverse::generate(model, &plan);
    let getters = members::getters(model);
    let parameterless = conversions::parameterless(model, &plan);
    let from_impls = conversions::from_impls(model, &plan);
    let facet_impls = conversions::facet_impls(model, &plan);
    let marker = marker::generated();

    quote! {
        #declaration

        #marker
        impl #ident {
            #constants
            #constructor
            #factory
            #projection
            #back_to
            #getters
        }

        #parameterless
        #from_impls
        #facet_impls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{compact, resolve_one};

    const USER: &str = r#"
        pub struct User {
            pub id: i64,
            pub name: String,
            #[facet(required)]
            pub password: String,
        }
    "#;

    #[test]
    fn emits_items_in_order() {
        let model = resolve_one(
            USER,
            "#[facet(source = \"User\", exclude(password))] pub struct UserDto;"
        );
        let rendered = compact(&emit(&model));
        let order = [
            "pubstructUserDto{",
            "implUserDto{",
            "pubconstMEMBERS",
            "pubfnnew(",
            "pubfnprojection(",
            "pubfnback_to(",
            "impl::core::default::DefaultforUserDto",
            "impl::core::convert::From<&User>forUserDto",
            "impl::facetize::FacetforUserDto",
            "impl::facetize::ReversibleforUserDto"
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| rendered.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!rendered.contains("pubpassword"));
    }

    #[test]
    fn emitted_items_parse() {
        let model = resolve_one(USER, "#[facet(source = \"User\")] pub struct UserDto;");
        let file: syn::File = syn::parse2(emit(&model)).unwrap();
        assert_eq!(file.items.len(), 7);
    }

    #[test]
    fn existing_constructor_emits_stub_only() {
        let src = format!("{USER} impl UserDto {{ pub fn new(id: i64) -> Self {{ todo!() }} }}");
        let model = resolve_one(&src, "#[facet(source = \"User\")] pub struct UserDto;");
        let rendered = compact(&emit(&model));
        assert!(rendered.contains("::core::unimplemented!"));
        assert!(!rendered.contains("pubfnnew("));
        assert!(!rendered.contains("pubfnprojection("));
        assert!(!rendered.contains("DefaultforUserDto"));
        assert!(!rendered.contains("Facetfor"));
        assert!(rendered.contains("pubfnback_to("));
    }
}
