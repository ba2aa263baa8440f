// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markers for generated code.
//!
//! Every impl block produced by the generator starts with [`generated`] so
//! that lints and tooling treat it as machine-written.

use proc_macro2::TokenStream;
use quote::quote;

/// Attributes placed before every generated impl block.
///
/// Generated mappings clone every carried member, including `Copy` ones, and
/// not every generated item is used by every caller.
pub fn generated() -> TokenStream {
    quote! {
        #[automatically_derived]
        #[allow(
            dead_code,
            clippy::clone_on_copy,
            clippy::redundant_clone,
            clippy::needless_update
        )]
    }
}
