// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field markers on source structs.
//!
//! Rust fields carry no notion of "required" or "init-only", so sources
//! declare them explicitly:
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `#[facet(required)]` | must be supplied at construction |
//! | `#[facet(init_only)]` | assignable only at construction |
//! | `#[facet(readonly)]` | read-only field (restricted fields) |
//! | `#[facet(flatten)]` | base struct whose members are lifted |
//! | `#[facet(id)]` | identity member (in addition to fields named `id`) |

use darling::FromField;
use syn::Field;

/// Parsed field markers.
#[derive(Debug, Default, Clone, FromField)]
#[darling(attributes(facet))]
pub struct FieldAttrs {
    /// Must be supplied at construction.
    #[darling(default)]
    pub required: bool,

    /// Assignable only at construction.
    #[darling(default)]
    pub init_only: bool,

    /// Read-only field.
    #[darling(default)]
    pub readonly: bool,

    /// Lift the members of this base struct.
    #[darling(default)]
    pub flatten: bool,

    /// Identity member.
    #[darling(default)]
    pub id: bool
}

impl FieldAttrs {
    /// Parse markers, treating malformed markers as absent.
    ///
    /// Malformed markers are reported once per module by
    /// [`FieldAttrs::validate`]; the inspector only needs a best effort view.
    pub fn of(field: &Field) -> Self {
        Self::from_field(field).unwrap_or_default()
    }

    /// Parse markers, keeping the error.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or malformed markers.
    pub fn validate(field: &Field) -> darling::Result<Self> {
        Self::from_field(field)
    }
}
