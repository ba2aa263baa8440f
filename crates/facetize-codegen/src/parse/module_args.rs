// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Arguments of the module attribute.
//!
//! ```rust,ignore
//! #[facetize::facets]                          // runtime at ::facetize
//! #[facetize::facets(crate = "::my::facetize")] // re-exported runtime
//! mod domain { .. }
//! ```

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use syn::Path;

/// Default runtime crate path.
pub fn default_runtime() -> Path {
    syn::parse_quote!(::facetize)
}

/// Arguments of `#[facets(..)]`.
#[derive(Debug, Clone, FromMeta)]
pub struct ModuleArgs {
    /// Path to the runtime crate used by generated code.
    #[darling(rename = "crate", default = "default_runtime")]
    pub runtime: Path
}

impl Default for ModuleArgs {
    fn default() -> Self {
        Self {
            runtime: default_runtime()
        }
    }
}

impl ModuleArgs {
    /// Parse the attribute arguments token stream.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed or unknown arguments.
    pub fn parse(args: TokenStream) -> darling::Result<Self> {
        if args.is_empty() {
            return Ok(Self::default());
        }
        let list = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&list)
    }
}
