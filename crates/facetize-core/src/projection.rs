// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reusable source → facet transforms.
//!
//! A [`Projection`] couples the list of source members a facet reads with a
//! non-capturing mapping function. Query layers use [`Projection::members`]
//! to build column lists and [`Projection::apply`] to materialize rows.
//!
//! # Example
//!
//! ```rust
//! use facetize_core::Projection;
//!
//! struct Order {
//!     id:    u32,
//!     total: u64
//! }
//!
//! struct OrderSummary {
//!     id: u32
//! }
//!
//! let projection: Projection<Order, OrderSummary> =
//!     Projection::new(&["id"], |order: &Order| OrderSummary { id: order.id });
//!
//! assert_eq!(projection.members(), &["id"]);
//! let summary = projection.apply(&Order { id: 4, total: 90 });
//! assert_eq!(summary.id, 4);
//! ```

use std::fmt;

/// A described transform from `S` to `F`.
pub struct Projection<S, F> {
    members: &'static [&'static str],
    map:     fn(&S) -> F
}

impl<S, F> Projection<S, F> {
    /// Create a projection from its member list and mapping function.
    pub const fn new(members: &'static [&'static str], map: fn(&S) -> F) -> Self {
        Self {
            members,
            map
        }
    }

    /// Source member names read by this projection, in facet member order.
    #[must_use]
    pub const fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// The underlying mapping function.
    #[must_use]
    pub const fn as_fn(&self) -> fn(&S) -> F {
        self.map
    }

    /// Apply the projection to one source value.
    pub fn apply(&self, source: &S) -> F {
        (self.map)(source)
    }

    /// Apply the projection to every source of an iterator.
    pub fn apply_all<'a, I>(&self, sources: I) -> Vec<F>
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>
    {
        sources.into_iter().map(self.map).collect()
    }
}

impl<S, F> Clone for Projection<S, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, F> Copy for Projection<S, F> {}

impl<S, F> fmt::Debug for Projection<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}
