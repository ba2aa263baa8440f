// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute copying from source members to facet members.
//!
//! With `copy_attributes`, field attributes such as `#[serde(rename = "..")]`
//! or `#[validate(length(min = 1))]` follow the member into the facet.
//!
//! # Pipeline
//!
//! ```text
//! field attrs
//!   │ filter::is_infrastructure   drop facet, doc, lints, cfg, tool attrs
//!   │ filter::is_bare_marker      drop #[validate] without rules
//!   │ filter::applies_to(slot)    drop attrs not valid on the destination
//!   ▼
//! Decoration::parse               tagged-union model, unrenderable → skipped
//!   ▼
//! ToTokens                        #[path(args)]
//! ```

mod decoration;
mod filter;

pub use decoration::{AttrArg, AttrValue, Decoration, DecorationBody};
use syn::Attribute;

/// Destination member kind of a copied decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Named struct field.
    Named,
    /// Positional tuple field.
    Positional
}

/// Copyable decorations of one source member for the given slot.
///
/// Attributes that cannot be re-rendered are skipped silently.
pub fn copy_decorations(attrs: &[Attribute], slot: Slot) -> Vec<Decoration> {
    attrs
        .iter()
        .filter(|attr| !filter::is_infrastructure(attr))
        .filter(|attr| !filter::is_bare_marker(attr))
        .filter(|attr| filter::applies_to(attr, slot))
        .filter_map(|attr| match Decoration::parse(attr) {
            Ok(decoration) => Some(decoration),
            Err(err) => {
                tracing::debug!(error = %err, "skipping attribute that cannot be copied");
                None
            }
        })
        .collect()
}
