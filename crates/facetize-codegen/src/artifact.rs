// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated artifacts.
//!
//! Every facet produces one [`GeneratedArtifact`]: its declaration and impl
//! blocks plus a file identity. The macro splices the tokens into the
//! module; the [`expand`](crate::expand) front-end renders and writes them.
//!
//! | Type | Module path | `qualified_file_name` | File |
//! |------|-------------|-----------------------|------|
//! | `UserDto` | `domain` | no | `user_dto.rs` |
//! | `UserDto` | `domain` | yes | `domain__user_dto.rs` |
//! | `UserDto` | `api::v1` | yes | `api__v1__user_dto.rs` |

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use syn::Ident;

/// Separator between module path segments in qualified file names.
const QUALIFIED_SEPARATOR: &str = "__";

/// One emitted unit.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Facet type name.
    pub type_name: String,
    /// Target file name.
    pub file_name: String,
    /// Declaration and impl blocks.
    pub tokens:    TokenStream
}

impl GeneratedArtifact {
    /// Render the artifact as formatted Rust source.
    ///
    /// # Errors
    ///
    /// Fails when the tokens do not form a sequence of items.
    pub fn render(&self) -> syn::Result<String> {
        let file: syn::File = syn::parse2(self.tokens.clone())?;
        Ok(prettyplease::unparse(&file))
    }
}

/// Replace every character that is not safe in a file name.
fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// File name of the artifact for `ident`.
pub fn file_name(ident: &Ident, module_path: &[String], qualified: bool) -> String {
    let type_part = ident.to_string().to_case(Case::Snake);
    if !qualified || module_path.is_empty() {
        return format!("{}.rs", sanitize(&type_part));
    }
    let mut parts: Vec<String> = module_path
        .iter()
        .map(|segment| sanitize(segment))
        .collect();
    parts.push(sanitize(&type_part));
    format!("{}.rs", parts.join(QUALIFIED_SEPARATOR))
}
