// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Architecture
//!
//! ```text
//! facetize-codegen/src/
//! ├── lib.rs          expand_module (proc-macro entry)
//! ├── module.rs       FacetModule: batch orchestration
//! ├── expand.rs       Expander: file front-end for build scripts
//! ├── parse.rs        darling attribute parsing
//! ├── symbols.rs      SymbolTable over the module items
//! ├── inspect.rs      source member collection
//! ├── resolve.rs      member resolution → FacetTargetModel
//! ├── nested.rs       FacetRegistry and nested shape detection
//! ├── copy.rs         attribute copying
//! ├── shape.rs        shape inference
//! ├── model.rs        shared data model
//! ├── emit.rs         code emission
//! ├── crud.rs         CRUD variant synthesis
//! ├── artifact.rs     GeneratedArtifact and file naming
//! ├── error.rs        ResolveError
//! └── utils/          docs, markers, type helpers
//! ```

pub mod artifact;
pub mod copy;
pub mod crud;
pub mod emit;
pub mod error;
pub mod expand;
pub mod inspect;
pub mod model;
pub mod module;
pub mod nested;
pub mod parse;
pub mod resolve;
pub mod shape;
pub mod symbols;
pub mod utils;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemMod;

use crate::{module::FacetModule, parse::ModuleArgs};

/// Expand a `#[facets]` module.
///
/// `args` are the attribute arguments, `item` the annotated module. Errors
/// are returned as `compile_error!` invocations next to whatever could be
/// generated.
pub fn expand_module(args: TokenStream, item: TokenStream) -> TokenStream {
    let module: ItemMod = match syn::parse2(item) {
        Ok(module) => module,
        Err(err) => return err.to_compile_error()
    };
    if module.content.is_none() {
        return syn::Error::new_spanned(
            &module,
            "#[facets] requires an inline module: `mod name { .. }`"
        )
        .to_compile_error();
    }

    let (args, arg_errors) = match ModuleArgs::parse(args) {
        Ok(args) => (args, None),
        Err(err) => (ModuleArgs::default(), Some(err.write_errors()))
    };
    let module_path = vec![module.ident.to_string()];
    let expansion = FacetModule {
        runtime:     &args.runtime,
        module_path: &module_path
    }
    .expand(module);
    let expanded = expansion.into_tokens();

    quote! {
        #expanded
        #arg_errors
    }
}
