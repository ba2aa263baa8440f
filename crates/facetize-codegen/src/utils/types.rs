// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type inspection helpers.
//!
//! The generator works on types exactly as they are written in the module,
//! so every check here is syntactic: `Option<T>` is recognized by its last
//! path segment, a struct reference by its bare identifier.

use syn::{GenericArgument, Ident, PathArguments, Type, TypePath};

/// Remove invisible groups and parentheses around a type.
///
/// `macro_rules!` expansions wrap interpolated types in `Type::Group`.
pub fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => peel(&group.elem),
        Type::Paren(paren) => peel(&paren.elem),
        other => other
    }
}

/// Plain path type without a qualified self (`<T as Trait>::X` is rejected).
fn plain_path(ty: &Type) -> Option<&TypePath> {
    match peel(ty) {
        Type::Path(path) if path.qself.is_none() => Some(path),
        _ => None
    }
}

/// Identifier of a non-generic path type (`User`, `crate::m::User`).
pub fn bare_ident(ty: &Type) -> Option<&Ident> {
    let segment = plain_path(ty)?.path.segments.last()?;
    matches!(segment.arguments, PathArguments::None).then_some(&segment.ident)
}

/// Last path segment name, ignoring generic arguments.
pub fn last_segment_name(ty: &Type) -> Option<String> {
    plain_path(ty)?
        .path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
}

/// The single type argument of a generic path type, with the segment name.
///
/// For `Vec<Item>` returns `("Vec", Item)`; `None` for anything else.
pub fn single_type_arg(ty: &Type) -> Option<(String, &Type)> {
    let segment = plain_path(ty)?.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some((segment.ident.to_string(), inner)),
        _ => None
    }
}

/// Inner type of `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    single_type_arg(ty).and_then(|(name, inner)| (name == "Option").then_some(inner))
}

/// Whether the type is already `Option<..>`.
pub fn is_option(ty: &Type) -> bool {
    option_inner(ty).is_some()
}

/// Wrap a type in `Option` unless it already is one.
///
/// Idempotent: `wrap_option(wrap_option(T)) == wrap_option(T)`.
pub fn wrap_option(ty: &Type) -> Type {
    if is_option(ty) {
        ty.clone()
    } else {
        syn::parse_quote!(::core::option::Option<#ty>)
    }
}
