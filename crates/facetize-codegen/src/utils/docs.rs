// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction utilities.
//!
//! Source members carry their doc comments over to the facet members built
//! from them. In Rust, doc comments (`///` and `/** */`) are stored as
//! `#[doc = "..."]` attributes; this module extracts and cleans them, and
//! turns the cleaned text back into attributes for the emitted member.
//!
//! # Example
//!
//! ```rust,ignore
//! pub struct User {
//!     /// Display name shown in the UI.
//!     pub name: String
//! }
//!
//! // Extracts to: "Display name shown in the UI."
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Attribute;

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming leading whitespace from each line.
///
/// # Returns
///
/// Combined doc string, or `None` if no doc comments present.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    if doc_lines.is_empty() {
        return None;
    }

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Render cleaned doc text as one `#[doc]` attribute per line.
///
/// Lines get a leading space so rustdoc renders them like `///` comments.
pub fn doc_attrs(doc: Option<&str>) -> TokenStream {
    let Some(doc) = doc else {
        return TokenStream::new();
    };
    let lines = doc.lines().map(|line| {
        let text = if line.is_empty() {
            String::new()
        } else {
            format!(" {line}")
        };
        quote! { #[doc = #text] }
    });
    quote! { #(#lines)* }
}
