// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Copy filters.
//!
//! | Rule | Dropped |
//! |------|---------|
//! | infrastructure | `facet`, `facet_dtos`, `doc`, lint levels, `cfg`, `cfg_attr`, `automatically_derived`, `rustfmt::*`, `clippy::*` |
//! | bare marker | `#[validate]` without rules |
//! | applicability | `serde`, `validate`, `schema`, `garde` on positional slots |
//!
//! Doc comments are dropped here because the emitter re-creates them from
//! the member's cleaned doc text.

use syn::{Attribute, Meta};

use super::Slot;

const INFRASTRUCTURE: &[&str] = &[
    "facet",
    "facet_dtos",
    "doc",
    "allow",
    "warn",
    "deny",
    "forbid",
    "expect",
    "cfg",
    "cfg_attr",
    "automatically_derived"
];

const TOOL_NAMESPACES: &[&str] = &["rustfmt", "clippy"];

const VALIDATION_MARKERS: &[&str] = &["validate", "garde"];

/// Attributes applicable to named fields only.
const NAMED_ONLY: &[&str] = &["serde", "validate", "schema", "garde"];

fn first_segment(attr: &Attribute) -> Option<String> {
    attr.path()
        .segments
        .first()
        .map(|segment| segment.ident.to_string())
}

/// Compiler or tooling attribute that never makes sense on a facet member.
pub fn is_infrastructure(attr: &Attribute) -> bool {
    let path = attr.path();
    if path.segments.len() > 1 {
        return first_segment(attr).is_some_and(|first| TOOL_NAMESPACES.contains(&first.as_str()));
    }
    path.get_ident()
        .is_some_and(|ident| INFRASTRUCTURE.iter().any(|name| ident == name))
}

/// Validation marker without any rule.
pub fn is_bare_marker(attr: &Attribute) -> bool {
    match &attr.meta {
        Meta::Path(path) => VALIDATION_MARKERS.iter().any(|name| path.is_ident(name)),
        Meta::List(list) => {
            list.tokens.is_empty() && VALIDATION_MARKERS.iter().any(|name| list.path.is_ident(name))
        }
        Meta::NameValue(_) => false
    }
}

/// Whether the attribute may be placed on the destination slot.
///
/// Unknown attributes apply to every slot.
pub fn applies_to(attr: &Attribute, slot: Slot) -> bool {
    match slot {
        Slot::Named => true,
        Slot::Positional => !NAMED_ONLY.iter().any(|name| attr.path().is_ident(name))
    }
}
