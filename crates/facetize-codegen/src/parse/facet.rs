// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Target-level attribute parsing.
//!
//! A struct carrying `#[facet(...)]` is a facet target declaration. darling
//! parses the raw attribute into [`FacetAttrs`]; [`FacetSpecification`] is the
//! normalized form the resolver works with.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `source` | Yes | — | Source struct of the module |
//! | `include(..)` | No | — | Keep only these members |
//! | `exclude(..)` | No | — | Drop these members |
//! | `nested(..)` | No | — | Facets used for nested members |
//! | `constructor` | No | `true` | Forward constructor and `From` impls |
//! | `default_constructor` | No | `true` | `impl Default` |
//! | `projection` | No | `true` | `projection()` |
//! | `reverse` | No | `true` | `back_to()` |
//! | `include_fields` | No | `false` | Collect restricted fields too |
//! | `preserve_init_only` | No | record-like | Private init-only members with getters |
//! | `preserve_required` | No | record-like | Keep required markers in `REQUIRED_MEMBERS` |
//! | `nullable` | No | `false` | Wrap every non-nested member in `Option` |
//! | `copy_attributes` | No | `false` | Copy field attributes |
//! | `configuration` | No | — | Custom mapping hook type |
//! | `record` | No | `false` | Record-like named shape |
//! | `qualified_file_name` | No | `false` | Module-qualified artifact file name |
//!
//! `include` and `exclude` are mutually exclusive. When both are given the
//! include list is disabled and the exclude list applies.

use darling::{FromDeriveInput, util::PathList};
use syn::{Ident, Path};

use crate::model::FacetKind;

fn default_true() -> bool {
    true
}

/// Raw `#[facet(...)]` attribute of a target declaration.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(facet), supports(struct_any))]
pub struct FacetAttrs {
    /// Target identifier.
    pub ident: Ident,

    /// Source struct.
    pub source: Path,

    /// Include list.
    #[darling(default)]
    pub include: Option<PathList>,

    /// Exclude list.
    #[darling(default)]
    pub exclude: Option<PathList>,

    /// Facets for nested members.
    #[darling(default)]
    pub nested: Option<PathList>,

    /// Generate the forward constructor.
    #[darling(default = "default_true")]
    pub constructor: bool,

    /// Generate `impl Default`.
    #[darling(default = "default_true")]
    pub default_constructor: bool,

    /// Generate `projection()`.
    #[darling(default = "default_true")]
    pub projection: bool,

    /// Generate `back_to()`.
    #[darling(default = "default_true")]
    pub reverse: bool,

    /// Collect restricted fields.
    #[darling(default)]
    pub include_fields: bool,

    /// Preserve init-only members; defaults by kind.
    #[darling(default)]
    pub preserve_init_only: Option<bool>,

    /// Preserve required members; defaults by kind.
    #[darling(default)]
    pub preserve_required: Option<bool>,

    /// Wrap every non-nested member in `Option`.
    #[darling(default)]
    pub nullable: bool,

    /// Copy field attributes.
    #[darling(default)]
    pub copy_attributes: bool,

    /// Custom mapping hook.
    #[darling(default)]
    pub configuration: Option<Path>,

    /// Record-like named shape.
    #[darling(default)]
    pub record: bool,

    /// Module-qualified artifact file name.
    #[darling(default)]
    pub qualified_file_name: bool
}

/// Member selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFilter {
    /// Keep only the listed members.
    Include(Vec<String>),
    /// Keep every member except the listed ones.
    Exclude(Vec<String>)
}

impl MemberFilter {
    /// Whether a member passes the filter.
    pub fn keeps(&self, name: &str) -> bool {
        match self {
            Self::Include(names) => names.iter().any(|n| n == name),
            Self::Exclude(names) => !names.iter().any(|n| n == name)
        }
    }

    /// Add names to an exclude list; include lists are left as they are.
    pub fn excluding(self, extra: impl IntoIterator<Item = String>) -> Self {
        match self {
            Self::Exclude(mut names) => {
                names.extend(extra);
                Self::Exclude(names)
            }
            include => include
        }
    }
}

/// Nullable wrapping applied to non-nested members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullablePolicy {
    /// Keep declared types.
    Keep,
    /// Wrap every non-nested member.
    All,
    /// Wrap every member, nested facets included.
    Everything
}

/// Treatment of identity members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityPolicy {
    /// Keep as declared.
    Keep,
    /// Drop from the facet.
    Drop,
    /// Keep, wrapped in `Option`.
    Optional
}

/// Generation options of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    /// Forward constructor and conversions.
    pub constructor:         bool,
    /// `impl Default`.
    pub default_constructor: bool,
    /// `projection()`.
    pub projection:          bool,
    /// `back_to()`.
    pub reverse:             bool,
    /// Collect restricted fields.
    pub include_fields:      bool,
    /// Preserve init-only members.
    pub preserve_init_only:  bool,
    /// Preserve required members.
    pub preserve_required:   bool,
    /// Copy field attributes.
    pub copy_attributes:     bool,
    /// Module-qualified artifact file name.
    pub qualified_file_name: bool,
    /// Nullable wrapping.
    pub nullable:            NullablePolicy,
    /// Identity member treatment.
    pub identity:            IdentityPolicy,
    /// Clear required-ness of every member.
    pub strip_required:      bool
}

impl FacetOptions {
    /// Defaults for a target of the given kind.
    pub fn for_kind(kind: FacetKind) -> Self {
        Self {
            constructor:         true,
            default_constructor: true,
            projection:          true,
            reverse:             true,
            include_fields:      false,
            preserve_init_only:  kind.is_record_like(),
            preserve_required:   kind.is_record_like(),
            copy_attributes:     false,
            qualified_file_name: false,
            nullable:            NullablePolicy::Keep,
            identity:            IdentityPolicy::Keep,
            strip_required:      false
        }
    }
}

/// Normalized configuration of one target.
#[derive(Debug, Clone)]
pub struct FacetSpecification {
    /// Source struct name.
    pub source:  Ident,
    /// Member selection.
    pub filter:  MemberFilter,
    /// Facet names for nested members.
    pub nested:  Vec<Ident>,
    /// Generation options.
    pub options: FacetOptions,
    /// Custom mapping hook.
    pub hook:    Option<Path>
}

/// Member names of a path list.
fn member_names(list: &PathList, errors: &mut darling::error::Accumulator) -> Vec<String> {
    list.iter()
        .filter_map(|path| {
            let name = path.get_ident().map(ToString::to_string);
            if name.is_none() {
                errors.push(darling::Error::custom("expected a member name").with_span(path));
            }
            name
        })
        .collect()
}

/// Last segment identifiers of a path list.
pub(crate) fn type_names(list: &PathList) -> Vec<Ident> {
    list.iter()
        .filter_map(|path| path.segments.last().map(|segment| segment.ident.clone()))
        .collect()
}

impl FacetSpecification {
    /// Normalize parsed attributes for a target of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is not a plain struct name or a list
    /// entry is not a member name.
    pub fn from_attrs(attrs: &FacetAttrs, kind: FacetKind) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();

        let source = match attrs.source.segments.last() {
            Some(segment) if segment.arguments.is_none() => Some(segment.ident.clone()),
            _ => {
                errors.push(
                    darling::Error::custom("source must name a struct of this module")
                        .with_span(&attrs.source)
                );
                None
            }
        };

        let include = attrs
            .include
            .as_ref()
            .map(|list| member_names(list, &mut errors));
        let exclude = attrs
            .exclude
            .as_ref()
            .map(|list| member_names(list, &mut errors));
        let filter = match (include, exclude) {
            (Some(_), Some(exclude)) => {
                tracing::debug!(
                    facet = %attrs.ident,
                    "both include and exclude given, include list disabled"
                );
                MemberFilter::Exclude(exclude)
            }
            (Some(include), None) => MemberFilter::Include(include),
            (None, exclude) => MemberFilter::Exclude(exclude.unwrap_or_default())
        };

        let defaults = FacetOptions::for_kind(kind);
        let options = FacetOptions {
            constructor: attrs.constructor,
            default_constructor: attrs.default_constructor,
            projection: attrs.projection,
            reverse: attrs.reverse,
            include_fields: attrs.include_fields,
            preserve_init_only: attrs
                .preserve_init_only
                .unwrap_or(defaults.preserve_init_only),
            preserve_required: attrs
                .preserve_required
                .unwrap_or(defaults.preserve_required),
            copy_attributes: attrs.copy_attributes,
            qualified_file_name: attrs.qualified_file_name,
            nullable: if attrs.nullable {
                NullablePolicy::All
            } else {
                NullablePolicy::Keep
            },
            ..defaults
        };

        errors.finish()?;

        let Some(source) = source else {
            return Err(darling::Error::custom("missing source"));
        };
        Ok(Self {
            source,
            filter,
            nested: attrs.nested.as_ref().map(type_names).unwrap_or_default(),
            options,
            hook: attrs.configuration.clone()
        })
    }
}
