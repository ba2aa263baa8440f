// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for facetize.
//!
//! This crate provides the runtime pieces referenced by code generated with
//! `#[facetize::facets]`. It can also be used standalone for hand-written
//! facets.
//!
//! # Overview
//!
//! - [`Facet`] — a type projected from a source type
//! - [`Reversible`] — a facet that can rebuild its source
//! - [`Projection`] — a reusable source → facet transform for query layers
//! - [`FacetConfiguration`] / [`FacetFactory`] — custom mapping hooks
//! - [`ToFacet`] — extension trait for `source.to_facet::<F>()`
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use facetize_core::{Facet, ToFacet};
//!
//! struct User {
//!     id:       i64,
//!     password: String
//! }
//!
//! struct UserDto {
//!     id: i64
//! }
//!
//! impl Facet for UserDto {
//!     type Source = User;
//!
//!     const MEMBERS: &'static [&'static str] = &["id"];
//!
//!     fn project(source: &User) -> Self {
//!         Self {
//!             id: source.id
//!         }
//!     }
//! }
//!
//! let user = User {
//!     id:       7,
//!     password: "secret".to_string()
//! };
//! let dto: UserDto = user.to_facet();
//! assert_eq!(dto.id, 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;
mod projection;

pub use projection::Projection;

/// A type projected from a source type.
///
/// Generated facets implement this trait whenever they can be built from
/// their source (a forward constructor or an initializer factory exists).
pub trait Facet: Sized {
    /// The type this facet is derived from.
    type Source;

    /// Names of the source members carried by this facet, in member order.
    const MEMBERS: &'static [&'static str];

    /// Build the facet from a borrowed source instance.
    fn project(source: &Self::Source) -> Self;
}

/// A facet that can reconstruct its source type.
///
/// Members the facet does not carry are reset to their type default, so
/// values of excluded members do not survive a round trip.
pub trait Reversible: Facet {
    /// Rebuild a source instance from this facet.
    fn reverse(&self) -> Self::Source;
}

/// Custom mapping hook that adjusts a freshly built facet.
///
/// Referenced with `#[facet(configuration = "MyMapper")]`. The generated
/// forward constructor fills every projected member first and then calls
/// [`FacetConfiguration::map`].
///
/// # Example
///
/// ```rust
/// use facetize_core::FacetConfiguration;
///
/// struct User {
///     first: String,
///     last:  String
/// }
///
/// struct UserDto {
///     full_name: String
/// }
///
/// struct UserMapper;
///
/// impl FacetConfiguration<User, UserDto> for UserMapper {
///     fn map(source: &User, target: &mut UserDto) {
///         target.full_name = format!("{} {}", source.first, source.last);
///     }
/// }
/// ```
pub trait FacetConfiguration<S, F> {
    /// Map additional values from `source` into an existing `target`.
    fn map(source: &S, target: &mut F);
}

/// Custom mapping hook that builds the whole facet.
///
/// Required only when the facet has init-only members and a custom
/// configuration: such facets cannot be adjusted after construction, so the
/// generated `from_source` delegates to [`FacetFactory::map_new`].
pub trait FacetFactory<S, F> {
    /// Build a fully initialized facet from `source`.
    fn map_new(source: &S) -> F;
}

/// Extension trait giving every type a `to_facet` conversion.
pub trait ToFacet {
    /// Project `self` into the facet `F`.
    fn to_facet<F>(&self) -> F
    where
        F: Facet<Source = Self>,
        Self: Sized
    {
        F::project(self)
    }
}

impl<T> ToFacet for T {}

/// Project every source of an iterator into the facet `F`.
///
/// # Example
///
/// ```rust
/// use facetize_core::{Facet, select_facets};
///
/// struct Item {
///     sku: u32
/// }
///
/// struct ItemDto {
///     sku: u32
/// }
///
/// impl Facet for ItemDto {
///     type Source = Item;
///
///     const MEMBERS: &'static [&'static str] = &["sku"];
///
///     fn project(source: &Item) -> Self {
///         Self {
///             sku: source.sku
///         }
///     }
/// }
///
/// let items = vec![Item { sku: 1 }, Item { sku: 2 }];
/// let dtos: Vec<ItemDto> = select_facets(&items);
/// assert_eq!(dtos.len(), 2);
/// ```
pub fn select_facets<'a, F, I>(sources: I) -> Vec<F>
where
    F: Facet,
    F::Source: 'a,
    I: IntoIterator<Item = &'a F::Source>
{
    sources.into_iter().map(F::project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account {
        id:     u64,
        secret: String
    }

    struct AccountView {
        id: u64
    }

    impl Facet for AccountView {
        type Source = Account;

        const MEMBERS: &'static [&'static str] = &["id"];

        fn project(source: &Account) -> Self {
            Self {
                id: source.id
            }
        }
    }

    impl Reversible for AccountView {
        fn reverse(&self) -> Account {
            Account {
                id:     self.id,
                secret: String::new()
            }
        }
    }

    #[test]
    fn to_facet_projects_source() {
        let account = Account {
            id:     3,
            secret: "hidden".to_string()
        };
        let view: AccountView = account.to_facet();
        assert_eq!(view.id, 3);
    }

    #[test]
    fn reverse_resets_uncarried_members() {
        let view = AccountView {
            id: 9
        };
        let account = view.reverse();
        assert_eq!(account.id, 9);
        assert!(account.secret.is_empty());
    }

    #[test]
    fn select_facets_keeps_order() {
        let accounts = vec![
            Account {
                id:     1,
                secret: String::new()
            },
            Account {
                id:     2,
                secret: String::new()
            },
        ];
        let views: Vec<AccountView> = select_facets(&accounts);
        let ids: Vec<u64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn members_constant_is_exposed() {
        assert_eq!(AccountView::MEMBERS, &["id"]);
    }
}
