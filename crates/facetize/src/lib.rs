// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # facetize
//!
//! One crate, all features. Re-exports:
//! - [`facets`] attribute macro from `facetize-impl`
//! - All types from `facetize-core` ([`Facet`], [`Reversible`],
//!   [`Projection`], [`FacetConfiguration`], [`FacetFactory`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use facetize::prelude::*;
//!
//! #[facetize::facets]
//! pub mod domain {
//!     pub struct User {
//!         pub id: i64,
//!         pub password: String
//!     }
//!
//!     #[facet(source = "User", exclude(password))]
//!     pub struct UserDto;
//! }
//!
//! let dto: domain::UserDto = user.to_facet();
//! ```

pub use facetize_core::*;
pub use facetize_impl::facets;
