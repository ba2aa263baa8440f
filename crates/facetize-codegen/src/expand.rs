// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! File front-end for build scripts and tooling.
//!
//! Finds every `#[facets]` module of a Rust source file, expands it, and
//! writes one formatted file per generated facet.
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     let out_dir = std::env::var("OUT_DIR").unwrap();
//!     facetize_codegen::expand::Expander::new(out_dir)
//!         .expand_file("src/domain.rs".as_ref())
//!         .unwrap();
//! }
//! ```
//!
//! Artifacts name their sources unqualified, so a generated file is meant
//! to be `include!`d next to the source structs it projects.

use std::{
    fs,
    path::{Path, PathBuf}
};

use darling::error::Accumulator;
use proc_macro2::TokenStream;
use syn::{Attribute, Item, Meta};
use thiserror::Error;

use crate::{artifact::GeneratedArtifact, module::FacetModule, parse::ModuleArgs};

/// Front-end failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing an artifact failed.
    #[error("failed to access `{}`", path.display())]
    Io {
        /// File involved.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error
    },

    /// The input is not valid Rust.
    #[error("failed to parse source: {0}")]
    Parse(#[from] syn::Error),

    /// Generator attributes are malformed.
    #[error("invalid facet attributes: {0}")]
    Attributes(#[from] darling::Error),

    /// An artifact does not render as Rust items.
    #[error("failed to render `{type_name}`")]
    Render {
        /// Facet name.
        type_name: String,
        /// Underlying error.
        #[source]
        source:    syn::Error
    }
}

/// Expands `#[facets]` modules into files under an output directory.
#[derive(Debug, Clone)]
pub struct Expander {
    out_dir: PathBuf
}

impl Expander {
    /// Create an expander writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into()
        }
    }

    /// Expand every `#[facets]` module of `source` into artifacts.
    ///
    /// # Errors
    ///
    /// Fails when the source does not parse or any generator attribute is
    /// malformed. Resolution faults only skip the affected facet.
    pub fn expand_source(&self, source: &str) -> Result<Vec<GeneratedArtifact>, Error> {
        let file = syn::parse_file(source)?;
        let mut artifacts = Vec::new();
        let mut errors = darling::Error::accumulator();
        collect(&file.items, &mut Vec::new(), &mut artifacts, &mut errors);
        errors.finish()?;
        Ok(artifacts)
    }

    /// Expand the modules of the file at `path` and write the artifacts.
    ///
    /// Returns the written paths in generation order.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, on the errors of [`Expander::expand_source`],
    /// and when an artifact does not render.
    pub fn expand_file(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source
        })?;
        let artifacts = self.expand_source(&source)?;
        fs::create_dir_all(&self.out_dir).map_err(|source| Error::Io {
            path: self.out_dir.clone(),
            source
        })?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let rendered = artifact.render().map_err(|source| Error::Render {
                type_name: artifact.type_name.clone(),
                source
            })?;
            let target = self.out_dir.join(&artifact.file_name);
            fs::write(&target, rendered).map_err(|source| Error::Io {
                path: target.clone(),
                source
            })?;
            tracing::debug!(path = %target.display(), facet = %artifact.type_name, "wrote artifact");
            written.push(target);
        }
        Ok(written)
    }
}

/// `#[facets]`, `#[facetize::facets]` and the like.
fn is_facets_attr(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "facets")
}

fn module_args(attr: &Attribute) -> darling::Result<ModuleArgs> {
    match &attr.meta {
        Meta::List(list) => ModuleArgs::parse(list.tokens.clone()),
        _ => ModuleArgs::parse(TokenStream::new())
    }
}

fn collect(
    items: &[Item],
    path: &mut Vec<String>,
    artifacts: &mut Vec<GeneratedArtifact>,
    errors: &mut Accumulator
) {
    for item in items {
        let Item::Mod(module) = item else {
            continue;
        };
        let Some((_, content)) = &module.content else {
            continue;
        };
        path.push(module.ident.to_string());
        match module.attrs.iter().find(|attr| is_facets_attr(attr)) {
            Some(attr) => {
                let args = errors.handle(module_args(attr)).unwrap_or_default();
                let mut module = module.clone();
                module.attrs.retain(|attr| !is_facets_attr(attr));
                let expansion = FacetModule {
                    runtime:     &args.runtime,
                    module_path: path
                }
                .expand(module);
                if let Some(err) = expansion.errors {
                    errors.push(err);
                }
                artifacts.extend(expansion.artifacts);
            }
            None => collect(content, path, artifacts, errors)
        }
        path.pop();
    }
}
