// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data model shared by the pipeline stages.
//!
//! ```text
//! inspect  → MemberDescriptor, SourceLayout
//! resolve  → ResolvedMember (+ NestedMapping)
//!          → FacetTargetModel ─→ emit
//! ```
//!
//! Every value here is built once per target and never mutated afterwards.
//! The emitter reads the ordered member list of a [`FacetTargetModel`] for
//! every sub-step, so forward, projection and reverse mappings always agree
//! on which members round-trip.

use syn::{Attribute, Expr, Field, Fields, Ident, Path, Type, Visibility};

use crate::{copy::Decoration, parse::FacetOptions, shape::ShapeInfo};

/// Declared shape of a facet type.
///
/// | Kind | Declaration | Record-like |
/// |------|-------------|-------------|
/// | `Struct` | `struct X;` / `struct X { .. }` | no |
/// | `Record` | as `Struct`, with `#[facet(record)]` | yes |
/// | `Tuple` | `struct X();` / `struct X(A, B);` | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// Named members, mutable conventions.
    Struct,
    /// Named members, immutable conventions.
    Record,
    /// Positional members.
    Tuple
}

impl FacetKind {
    /// Classify a target declaration.
    pub fn from_fields(fields: &Fields, record: bool) -> Self {
        match fields {
            Fields::Unnamed(_) => Self::Tuple,
            _ if record => Self::Record,
            _ => Self::Struct
        }
    }

    /// Record-like kinds preserve init-only and required semantics by default.
    pub fn is_record_like(self) -> bool {
        matches!(self, Self::Record | Self::Tuple)
    }

    /// Whether generated members are positional.
    pub fn is_positional(self) -> bool {
        self == Self::Tuple
    }
}

/// How a source member is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `pub` field.
    Public,
    /// Restricted field (`pub(crate)`, `pub(super)`, `pub(in ..)`), collected
    /// only with `include_fields`.
    Restricted
}

/// One source member considered for projection.
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    /// Member name, unique after shadowing resolution.
    pub name:      String,
    /// Field identifier.
    pub ident:     Ident,
    /// Access path from the source root (`base.id` for a flattened base).
    pub path:      Vec<Ident>,
    /// Declared type.
    pub ty:        Type,
    /// Declared visibility.
    pub vis:       Visibility,
    /// Public or restricted.
    pub kind:      MemberKind,
    /// Assignable only at construction.
    pub init_only: bool,
    /// Must be supplied at construction.
    pub required:  bool,
    /// Read-only restricted field.
    pub readonly:  bool,
    /// Identity member (`id` or `#[facet(id)]`).
    pub identity:  bool,
    /// Cleaned doc comment text.
    pub doc:       Option<String>,
    /// Raw field attributes, input to the attribute copier.
    pub attrs:     Vec<Attribute>
}

impl MemberDescriptor {
    /// Init-only semantics, readonly fields included.
    pub fn is_init_only(&self) -> bool {
        self.init_only || self.readonly
    }
}

/// Sequence types that normalize to `Vec` in the facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// `VecDeque<T>`
    VecDeque,
    /// `LinkedList<T>`
    LinkedList,
    /// `Box<[T]>`
    BoxedSlice,
    /// `Rc<[T]>`
    RcSlice,
    /// `Arc<[T]>`
    ArcSlice
}

/// Collection shape of a nested member.
#[derive(Debug, Clone)]
pub enum CollectionShape {
    /// `Vec<T>`, stays `Vec<F>`.
    List,
    /// `[T; N]`, stays `[F; N]`.
    Array(Expr),
    /// Other sequences, materialized as `Vec<F>`.
    Sequence(SequenceKind)
}

/// How a nested member wraps its nested source type.
#[derive(Debug, Clone)]
pub enum NestedShape {
    /// `T`
    Scalar,
    /// `Option<T>`
    Optional,
    /// A collection of `T`.
    Collection(CollectionShape)
}

/// Member mapped through another facet.
#[derive(Debug, Clone)]
pub struct NestedMapping {
    /// Facet type used in the generated member.
    pub facet:  Ident,
    /// Source type of that facet, as found in the member type.
    pub source: Ident,
    /// Wrapper around the nested source type.
    pub shape:  NestedShape
}

/// A member kept in the final facet.
#[derive(Debug, Clone)]
pub struct ResolvedMember {
    /// Source member this one is derived from.
    pub source:           MemberDescriptor,
    /// Type emitted in the facet.
    pub ty:               Type,
    /// Nested facet mapping, if the member maps through one.
    pub nested:           Option<NestedMapping>,
    /// The emitted type was wrapped in `Option` by a nullable policy.
    pub nullable_wrapped: bool,
    /// Preserved init-only: private field with a getter.
    pub init_only:        bool,
    /// Preserved required: listed in `REQUIRED_MEMBERS`.
    pub required:         bool,
    /// Copied decorations for the destination slot.
    pub decorations:      Vec<Decoration>
}

impl ResolvedMember {
    /// Member name.
    pub fn name(&self) -> &str {
        &self.source.name
    }

    /// Member identifier.
    pub fn ident(&self) -> &Ident {
        &self.source.ident
    }
}

/// Source struct layout used to rebuild a source instance.
///
/// Unlike the member map it keeps every slot: private, shadowed and
/// excluded slots are filled with default literals by the reverse mapper.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    /// Struct name.
    pub ident: Ident,
    /// Fields in declaration order.
    pub slots: Vec<LayoutSlot>
}

/// One field of a [`SourceLayout`].
#[derive(Debug, Clone)]
pub struct LayoutSlot {
    /// Field identifier.
    pub ident:   Ident,
    /// Declared type.
    pub ty:      Type,
    /// What fills the slot on reconstruction.
    pub content: SlotContent
}

/// Content of a layout slot.
#[derive(Debug, Clone)]
pub enum SlotContent {
    /// Slot owning the member of this name.
    Member(String),
    /// Flattened base struct, rebuilt recursively.
    Base(SourceLayout),
    /// Slot no member is derived from (private or shadowed).
    Hidden
}

/// Fully resolved blueprint for one generated facet.
#[derive(Debug, Clone)]
pub struct FacetTargetModel {
    /// Facet type name.
    pub ident:             Ident,
    /// Facet visibility.
    pub vis:               Visibility,
    /// Outer attributes re-emitted on the declaration.
    pub attrs:             Vec<Attribute>,
    /// Declared shape.
    pub kind:              FacetKind,
    /// Hand-written fields, kept ahead of generated ones.
    pub user_fields:       Vec<Field>,
    /// Source type name.
    pub source:            Ident,
    /// Final ordered member list.
    pub members:           Vec<ResolvedMember>,
    /// Required source members dropped by the filter.
    pub excluded_required: Vec<MemberDescriptor>,
    /// Source layout for the reverse mapper.
    pub layout:            SourceLayout,
    /// Custom mapping hook type.
    pub hook:              Option<Path>,
    /// Generation options.
    pub options:           FacetOptions,
    /// Structural facts from shape inference.
    pub shape:             ShapeInfo,
    /// Path of the runtime crate in generated code.
    pub runtime:           Path,
    /// Artifact file name.
    pub file_name:         String
}

impl FacetTargetModel {
    /// Whether any kept member is preserved init-only.
    pub fn is_init_only_heavy(&self) -> bool {
        self.members.iter().any(|member| member.init_only)
    }

    /// Index of a generated positional member, after hand-written fields.
    pub fn positional_index(&self, position: usize) -> syn::Index {
        syn::Index::from(self.user_fields.len() + position)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn kind_from_unit_struct() {
        let item: syn::ItemStruct = parse_quote!(pub struct UserDto;);
        assert_eq!(FacetKind::from_fields(&item.fields, false), FacetKind::Struct);
        assert_eq!(FacetKind::from_fields(&item.fields, true), FacetKind::Record);
    }

    #[test]
    fn kind_from_tuple_struct() {
        let item: syn::ItemStruct = parse_quote!(pub struct UserDto(););
        let kind = FacetKind::from_fields(&item.fields, false);
        assert_eq!(kind, FacetKind::Tuple);
        assert!(kind.is_record_like());
        assert!(kind.is_positional());
    }

    #[test]
    fn plain_struct_is_not_record_like() {
        assert!(!FacetKind::Struct.is_record_like());
        assert!(FacetKind::Record.is_record_like());
    }
}
