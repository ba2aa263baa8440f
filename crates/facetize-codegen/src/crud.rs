// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CRUD variant synthesis.
//!
//! A `#[facet_dtos(..)]` source yields one synthetic target declaration per
//! requested variant. Each runs through the same resolver and emitter as a
//! hand-written target, with a variant overlay on its options.
//!
//! | Variant | Name | Identity members | Other members | Projection | Reverse |
//! |---------|------|------------------|---------------|------------|---------|
//! | Create | `Create{S}Request` | dropped | as declared | no | yes |
//! | Update | `Update{S}Request` | as declared | as declared | no | yes |
//! | Upsert | `Upsert{S}Request` | `Option` | as declared | no | yes |
//! | Response | `{S}Response` | as declared | as declared | yes | yes |
//! | Query | `{S}Query` | `Option` | `Option` (nested included), not required | no | no |

use syn::{Attribute, Generics, ItemStruct, parse_quote};

use crate::{
    model::FacetKind,
    parse::{
        CrudVariant, DtoAttrs, FacetOptions, FacetSpecification, IdentityPolicy, MemberFilter,
        NullablePolicy
    },
    resolve::TargetDecl
};

/// Options of one variant.
fn options(variant: CrudVariant, dtos: &DtoAttrs) -> FacetOptions {
    let defaults = FacetOptions::for_kind(FacetKind::Struct);
    let options = FacetOptions {
        include_fields: dtos.include_fields,
        copy_attributes: dtos.copy_attributes,
        projection: variant == CrudVariant::Response,
        ..defaults
    };
    match variant {
        CrudVariant::Create => FacetOptions {
            identity: IdentityPolicy::Drop,
            ..options
        },
        CrudVariant::Upsert => FacetOptions {
            identity: IdentityPolicy::Optional,
            ..options
        },
        CrudVariant::Query => FacetOptions {
            nullable: NullablePolicy::Everything,
            strip_required: true,
            reverse: false,
            ..options
        },
        CrudVariant::Update | CrudVariant::Response => options
    }
}

fn attrs(variant: CrudVariant, source: &ItemStruct, dtos: &DtoAttrs) -> Vec<Attribute> {
    let doc = format!(" {} [`{}`].", variant.describe(), source.ident);
    let derives = dtos.derives();
    let mut attrs: Vec<Attribute> = vec![parse_quote!(#[doc = #doc])];
    if !derives.is_empty() {
        attrs.push(parse_quote!(#[derive(#(#derives),*)]));
    }
    attrs
}

/// Synthetic target declarations for every requested variant of `source`.
pub fn variant_decls(source: &ItemStruct, dtos: &DtoAttrs) -> Vec<TargetDecl> {
    dtos.variants()
        .into_iter()
        .map(|variant| TargetDecl {
            ident:       variant.type_name(&source.ident),
            vis:         source.vis.clone(),
            attrs:       attrs(variant, source, dtos),
            generics:    Generics::default(),
            kind:        FacetKind::Struct,
            user_fields: Vec::new(),
            spec:        FacetSpecification {
                source:  source.ident.clone(),
                filter:  MemberFilter::Exclude(dtos.excluded()),
                nested:  dtos.nested(),
                options: options(variant, dtos),
                hook:    None
            }
        })
        .collect()
}
