// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-target resolution faults.
//!
//! A fault skips the affected target only: its declaration is re-emitted as
//! written, a warning is logged, and the other targets of the module are
//! generated normally. Attribute errors are not faults; they are reported as
//! compile errors through darling.

use thiserror::Error;

/// Reason a target could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The source struct is not declared in the module.
    #[error("source `{source_name}` is not a struct of this module")]
    SourceNotFound {
        /// Source name.
        source_name: String
    },

    /// The source struct has generic parameters.
    #[error("source `{source_name}` is generic")]
    GenericSource {
        /// Source name.
        source_name: String
    },

    /// The source is a tuple or unit struct.
    #[error("source `{source_name}` has no named fields")]
    UnsupportedSource {
        /// Source name.
        source_name: String
    },

    /// A flatten field does not name a struct of the module.
    #[error("flatten field `{field}` of `{source_name}` does not name a struct of this module")]
    UnknownBase {
        /// Struct declaring the field.
        source_name: String,
        /// Field name.
        field:       String
    },

    /// The target declaration has generic parameters.
    #[error("target `{target}` is generic")]
    GenericTarget {
        /// Target name.
        target: String
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_types() {
        let err = ResolveError::UnknownBase {
            source_name: "User".into(),
            field:       "base".into()
        };
        assert_eq!(
            err.to_string(),
            "flatten field `base` of `User` does not name a struct of this module"
        );
        let err = ResolveError::GenericTarget {
            target: "UserDto".into()
        };
        assert!(err.to_string().contains("UserDto"));
    }
}
