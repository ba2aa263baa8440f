// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use facetize_core::prelude::*;
//! ```

pub use crate::{
    Facet, FacetConfiguration, FacetFactory, Projection, Reversible, ToFacet, select_facets
};
