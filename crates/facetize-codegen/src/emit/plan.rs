// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Emission plan.
//!
//! A pure function from structural flags to the set of sub-emitters that
//! run for one facet. Every shape decision of the emitter lives here.
//!
//! # Dispatch table
//!
//! | Condition | Forward | Factory | Default | Projection |
//! |-----------|---------|---------|---------|------------|
//! | existing constructor | omitted | stub | omitted | omitted |
//! | init-only + hook | fenced | hook | yes | initializer |
//! | init-only | direct | initializer | yes | initializer |
//! | tuple | direct | omitted | yes | positional |
//! | otherwise | direct | omitted | yes | initializer |
//!
//! Each column is further gated by its own option and by hand-written items
//! of the target: the generator never emits an item the user already wrote.

use crate::model::FacetKind;

/// How generated members are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLayout {
    /// Named fields after hand-written named fields.
    Named,
    /// Positional fields.
    Positional,
    /// Positional fields after a hand-written positional list.
    PositionalAppended
}

/// Forward constructor `new(&Source)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardMode {
    /// Builds the facet, then runs the configuration hook if any.
    Direct,
    /// Panics, directing callers to `from_source`.
    Fenced,
    /// Not emitted.
    Omitted
}

/// Static factory `from_source(&Source)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryMode {
    /// Builds the facet with an initializer.
    Initializer,
    /// Delegates to the factory hook.
    Hook,
    /// Fails loudly until written by hand.
    Stub,
    /// Not emitted.
    Omitted
}

/// Form of the `projection()` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// `Self(a, b)`.
    Positional,
    /// `Self { a: .., b: .. }` (`Self { 0: .., 1: .. }` for tuples).
    Initializer,
    /// Not emitted.
    Omitted
}

/// Constructor used by conversions and `Facet::project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    /// `Self::new(source)`.
    New,
    /// `Self::from_source(source)`.
    FromSource
}

/// Flags the plan is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanInput {
    /// Declared kind.
    pub kind:                 FacetKind,
    /// The target owns its constructor.
    pub existing_ctor:        bool,
    /// Some member is preserved init-only.
    pub init_only_heavy:      bool,
    /// A configuration hook is set.
    pub has_hook:             bool,
    /// `constructor` option.
    pub constructor:          bool,
    /// `default_constructor` option.
    pub default_constructor:  bool,
    /// `projection` option.
    pub projection:           bool,
    /// `reverse` option.
    pub reverse:              bool,
    /// Hand-written `from_source`.
    pub user_has_from_source: bool,
    /// Hand-written or derived `Default`.
    pub user_has_default:     bool,
    /// Hand-written `projection`.
    pub user_has_projection:  bool,
    /// Hand-written `back_to`.
    pub user_has_back_to:     bool,
    /// Hand-written `From` impls.
    pub user_has_conversions: bool,
    /// Hand-written `Facet` impl.
    pub user_has_facet_impl:  bool
}

/// Sub-emitters to run for one facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionPlan {
    /// Member declaration layout.
    pub layout:          MemberLayout,
    /// Forward constructor.
    pub forward:         ForwardMode,
    /// Static factory.
    pub factory:         FactoryMode,
    /// `impl Default`.
    pub parameterless:   bool,
    /// `projection()`.
    pub projection:      ProjectionMode,
    /// `back_to()`.
    pub reverse:         bool,
    /// `From<&Source>` and `From<Source>`.
    pub conversions:     Option<Builder>,
    /// `impl Facet`.
    pub facet_impl:      Option<Builder>,
    /// `impl Reversible`.
    pub reversible_impl: bool
}

impl EmissionPlan {
    /// Compute the plan.
    pub fn for_target(input: PlanInput) -> Self {
        let layout = match (input.kind, input.existing_ctor) {
            (FacetKind::Tuple, true) => MemberLayout::PositionalAppended,
            (FacetKind::Tuple, false) => MemberLayout::Positional,
            _ => MemberLayout::Named
        };

        let forward = if input.existing_ctor || !input.constructor {
            ForwardMode::Omitted
        } else if input.init_only_heavy && input.has_hook {
            ForwardMode::Fenced
        } else {
            ForwardMode::Direct
        };

        let factory = if input.user_has_from_source {
            FactoryMode::Omitted
        } else if input.existing_ctor {
            FactoryMode::Stub
        } else if input.init_only_heavy && input.has_hook {
            FactoryMode::Hook
        } else if input.init_only_heavy {
            FactoryMode::Initializer
        } else {
            FactoryMode::Omitted
        };

        let parameterless =
            !input.existing_ctor && input.default_constructor && !input.user_has_default;

        let projection = if input.existing_ctor || !input.projection || input.user_has_projection
        {
            ProjectionMode::Omitted
        } else if input.kind == FacetKind::Tuple && !input.init_only_heavy {
            ProjectionMode::Positional
        } else {
            ProjectionMode::Initializer
        };

        let reverse = input.reverse && !input.user_has_back_to;

        let builder = match (forward, factory) {
            (ForwardMode::Direct, _) => Some(Builder::New),
            (_, FactoryMode::Initializer | FactoryMode::Hook) => Some(Builder::FromSource),
            _ => None
        };
        let conversions = builder.filter(|_| !input.user_has_conversions);
        let facet_impl = builder.filter(|_| !input.user_has_facet_impl);

        Self {
            layout,
            forward,
            factory,
            parameterless,
            projection,
            reverse,
            conversions,
            facet_impl,
            reversible_impl: facet_impl.is_some() && reverse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: FacetKind) -> PlanInput {
        PlanInput {
            kind,
            existing_ctor: false,
            init_only_heavy: false,
            has_hook: false,
            constructor: true,
            default_constructor: true,
            projection: true,
            reverse: true,
            user_has_from_source: false,
            user_has_default: false,
            user_has_projection: false,
            user_has_back_to: false,
            user_has_conversions: false,
            user_has_facet_impl: false
        }
    }

    #[test]
    fn plain_struct_emits_everything() {
        let plan = EmissionPlan::for_target(input(FacetKind::Struct));
        assert_eq!(plan.layout, MemberLayout::Named);
        assert_eq!(plan.forward, ForwardMode::Direct);
        assert_eq!(plan.factory, FactoryMode::Omitted);
        assert!(plan.parameterless);
        assert_eq!(plan.projection, ProjectionMode::Initializer);
        assert!(plan.reverse);
        assert_eq!(plan.conversions, Some(Builder::New));
        assert!(plan.reversible_impl);
    }

    #[test]
    fn tuple_projects_positionally() {
        let plan = EmissionPlan::for_target(input(FacetKind::Tuple));
        assert_eq!(plan.layout, MemberLayout::Positional);
        assert_eq!(plan.projection, ProjectionMode::Positional);
    }

    #[test]
    fn init_only_tuple_projects_with_initializer() {
        let plan = EmissionPlan::for_target(PlanInput {
            init_only_heavy: true,
            ..input(FacetKind::Tuple)
        });
        assert_eq!(plan.projection, ProjectionMode::Initializer);
        assert_eq!(plan.factory, FactoryMode::Initializer);
        assert_eq!(plan.forward, ForwardMode::Direct);
    }

    #[test]
    fn existing_constructor_suppresses_forward_projection_default() {
        let plan = EmissionPlan::for_target(PlanInput {
            existing_ctor: true,
            ..input(FacetKind::Tuple)
        });
        assert_eq!(plan.layout, MemberLayout::PositionalAppended);
        assert_eq!(plan.forward, ForwardMode::Omitted);
        assert_eq!(plan.projection, ProjectionMode::Omitted);
        assert!(!plan.parameterless);
        assert_eq!(plan.factory, FactoryMode::Stub);
        assert_eq!(plan.conversions, None);
        assert_eq!(plan.facet_impl, None);
        assert!(plan.reverse);
    }

    #[test]
    fn init_only_with_hook_fences_forward() {
        let plan = EmissionPlan::for_target(PlanInput {
            init_only_heavy: true,
            has_hook: true,
            ..input(FacetKind::Record)
        });
        assert_eq!(plan.forward, ForwardMode::Fenced);
        assert_eq!(plan.factory, FactoryMode::Hook);
        assert_eq!(plan.conversions, Some(Builder::FromSource));
    }

    #[test]
    fn hook_without_init_only_stays_direct() {
        let plan = EmissionPlan::for_target(PlanInput {
            has_hook: true,
            ..input(FacetKind::Struct)
        });
        assert_eq!(plan.forward, ForwardMode::Direct);
        assert_eq!(plan.factory, FactoryMode::Omitted);
    }

    #[test]
    fn hand_written_items_are_respected() {
        let plan = EmissionPlan::for_target(PlanInput {
            init_only_heavy: true,
            user_has_from_source: true,
            user_has_default: true,
            user_has_back_to: true,
            user_has_conversions: true,
            ..input(FacetKind::Struct)
        });
        assert_eq!(plan.factory, FactoryMode::Omitted);
        assert!(!plan.parameterless);
        assert!(!plan.reverse);
        assert_eq!(plan.conversions, None);
        assert_eq!(plan.facet_impl, Some(Builder::New));
        assert!(!plan.reversible_impl);
    }

    #[test]
    fn disabled_options() {
        let plan = EmissionPlan::for_target(PlanInput {
            constructor: false,
            default_constructor: false,
            projection: false,
            reverse: false,
            ..input(FacetKind::Struct)
        });
        assert_eq!(plan.forward, ForwardMode::Omitted);
        assert!(!plan.parameterless);
        assert_eq!(plan.projection, ProjectionMode::Omitted);
        assert!(!plan.reverse);
        assert_eq!(plan.conversions, None);
    }

    #[test]
    fn factory_backs_conversions_without_forward() {
        let plan = EmissionPlan::for_target(PlanInput {
            constructor: false,
            init_only_heavy: true,
            ..input(FacetKind::Struct)
        });
        assert_eq!(plan.conversions, Some(Builder::FromSource));
    }
}
