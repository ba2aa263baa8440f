// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Default value literals.
//!
//! Used wherever a value is needed that no facet member provides: source
//! slots the facet does not carry, `impl Default` for the facet, and the
//! fallback of a nullable-wrapped member on the way back.
//!
//! | Type | Literal |
//! |------|---------|
//! | `Option<T>` | `None` |
//! | `String` | `String::new()` |
//! | `&str` | `""` |
//! | integers | `0` with the type suffix |
//! | `f32`, `f64` | `0.0` with the type suffix |
//! | `bool` | `false` |
//! | `char` | `'\0'` |
//! | `SystemTime` | `SystemTime::UNIX_EPOCH` |
//! | `OffsetDateTime` | `OffsetDateTime::UNIX_EPOCH` |
//! | `Uuid`, `Ulid` | `nil()` |
//! | anything else | `Default::default()` |

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{LitChar, LitFloat, LitInt, Type};

use crate::utils::types::{bare_ident, is_option, peel};

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize"
];

fn is_str_ref(ty: &Type) -> bool {
    match peel(ty) {
        Type::Reference(reference) => {
            bare_ident(&reference.elem).is_some_and(|ident| ident == "str")
        }
        _ => false
    }
}

/// Literal producing the default value of `ty`.
pub fn default_literal(ty: &Type) -> TokenStream {
    if is_str_ref(ty) {
        return quote! { "" };
    }
    if is_option(ty) {
        return quote! { ::core::option::Option::None };
    }
    let Some(name) = bare_ident(ty).map(ToString::to_string) else {
        return fallback(ty);
    };
    match name.as_str() {
        "String" => quote! { ::std::string::String::new() },
        "bool" => quote! { false },
        "char" => {
            let lit = LitChar::new('\0', Span::call_site());
            quote! { #lit }
        }
        "f32" | "f64" => {
            let lit = LitFloat::new(&format!("0.0{name}"), Span::call_site());
            quote! { #lit }
        }
        int if INTEGERS.contains(&int) => {
            let lit = LitInt::new(&format!("0{int}"), Span::call_site());
            quote! { #lit }
        }
        "SystemTime" => quote! { ::std::time::SystemTime::UNIX_EPOCH },
        "OffsetDateTime" => quote! { <#ty>::UNIX_EPOCH },
        "Uuid" | "Ulid" => quote! { <#ty>::nil() },
        _ => fallback(ty)
    }
}

fn fallback(ty: &Type) -> TokenStream {
    quote! { <#ty as ::core::default::Default>::default() }
}
