// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Symbol table of one `#[facets]` module.
//!
//! The items of the annotated module are the symbol model the generator
//! works against: every struct is a potential source or target, inherent
//! `impl` blocks reveal constructors and hand-written methods, and trait
//! impls reveal what the user already implemented by hand.
//!
//! ```text
//! mod domain {
//!     struct User { .. }            → structs["User"]
//!     impl User { pub fn new(..) }  → inherent_fns[("User", "new")]
//!     impl Default for UserDto {}   → trait_impls[("UserDto", "Default")]
//!     impl From<&User> for UserDto  → from_impls[("UserDto", "User")]
//! }
//! ```

use indexmap::{IndexMap, IndexSet};
use syn::{
    GenericArgument, ImplItem, ImplItemFn, Item, ItemImpl, ItemStruct, PathArguments, Type
};

use crate::utils::types::last_segment_name;

/// Index over the items of one module.
#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    structs:      IndexMap<String, &'a ItemStruct>,
    inherent_fns: IndexMap<(String, String), &'a ImplItemFn>,
    trait_impls:  IndexSet<(String, String)>,
    from_impls:   IndexSet<(String, String)>
}

impl<'a> SymbolTable<'a> {
    /// Index every struct, inherent fn and trait impl of `items`.
    pub fn from_items(items: &'a [Item]) -> Self {
        let mut table = Self::default();
        for item in items {
            match item {
                Item::Struct(item) => {
                    table.structs.entry(item.ident.to_string()).or_insert(item);
                }
                Item::Impl(item) => table.index_impl(item),
                _ => {}
            }
        }
        table
    }

    fn index_impl(&mut self, item: &'a ItemImpl) {
        let Some(self_ty) = last_segment_name(&item.self_ty) else {
            return;
        };
        match &item.trait_ {
            Some((_, path, _)) => {
                let Some(segment) = path.segments.last() else {
                    return;
                };
                if segment.ident == "From"
                    && let Some(from) = conversion_source(&segment.arguments)
                {
                    self.from_impls.insert((self_ty.clone(), from));
                }
                self.trait_impls
                    .insert((self_ty, segment.ident.to_string()));
            }
            None => {
                for impl_item in &item.items {
                    if let ImplItem::Fn(func) = impl_item {
                        self.inherent_fns
                            .entry((self_ty.clone(), func.sig.ident.to_string()))
                            .or_insert(func);
                    }
                }
            }
        }
    }

    /// Struct declared in the module under `name`.
    pub fn struct_named(&self, name: &str) -> Option<&'a ItemStruct> {
        self.structs.get(name).copied()
    }

    /// Inherent function `name` declared for type `ty`.
    pub fn inherent_fn(&self, ty: &str, name: &str) -> Option<&'a ImplItemFn> {
        self.inherent_fns
            .get(&(ty.to_string(), name.to_string()))
            .copied()
    }

    /// Names of every inherent function declared for `ty`.
    pub fn inherent_fn_names(&self, ty: &str) -> IndexSet<String> {
        self.inherent_fns
            .keys()
            .filter(|(owner, _)| owner == ty)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Whether the module implements `From<source>` or `From<&source>` for `ty`.
    pub fn converts_from(&self, ty: &str, source: &str) -> bool {
        self.from_impls
            .contains(&(ty.to_string(), source.to_string()))
    }

    /// Whether the module implements trait `name` (last path segment) for `ty`.
    pub fn implements(&self, ty: &str, name: &str) -> bool {
        self.trait_impls
            .contains(&(ty.to_string(), name.to_string()))
    }
}

/// Type name `T` of `From<T>` or `From<&T>`.
fn conversion_source(arguments: &PathArguments) -> Option<String> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    let Some(GenericArgument::Type(ty)) = args.args.first() else {
        return None;
    };
    match ty {
        Type::Reference(reference) => last_segment_name(&reference.elem),
        ty => last_segment_name(ty)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn items() -> Vec<Item> {
        let file: syn::File = parse_quote! {
            pub struct User {
                pub id: i64
            }

            pub struct UserDto;

            impl User {
                pub fn new(id: i64) -> Self {
                    Self { id }
                }
            }

            impl Default for UserDto {
                fn default() -> Self {
                    Self
                }
            }

            impl From<&User> for UserDto {
                fn from(_: &User) -> Self {
                    Self
                }
            }

            impl From<u8> for UserDto {
                fn from(_: u8) -> Self {
                    Self
                }
            }

            impl std::fmt::Display for User {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.id)
                }
            }
        };
        file.items
    }

    #[test]
    fn indexes_structs_by_name() {
        let items = items();
        let table = SymbolTable::from_items(&items);
        assert!(table.struct_named("User").is_some());
        assert!(table.struct_named("UserDto").is_some());
        assert!(table.struct_named("Missing").is_none());
    }

    #[test]
    fn indexes_inherent_functions() {
        let items = items();
        let table = SymbolTable::from_items(&items);
        assert!(table.inherent_fn("UserDto", "new").is_none());
        let new = table.inherent_fn("User", "new").unwrap();
        assert_eq!(new.sig.inputs.len(), 1);
        assert!(table.inherent_fn_names("User").contains("new"));
        assert!(table.inherent_fn_names("UserDto").is_empty());
    }

    #[test]
    fn indexes_trait_impls_by_last_segment() {
        let items = items();
        let table = SymbolTable::from_items(&items);
        assert!(table.implements("UserDto", "Default"));
        assert!(table.implements("User", "Display"));
        assert!(!table.implements("User", "Default"));
    }

    #[test]
    fn indexes_conversions_by_argument_type() {
        let items = items();
        let table = SymbolTable::from_items(&items);
        assert!(table.converts_from("UserDto", "User"));
        assert!(table.converts_from("UserDto", "u8"));
        assert!(!table.converts_from("UserDto", "Order"));
        assert!(!table.converts_from("User", "User"));
    }
}
