// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use quote::ToTokens;
use syn::{Item, parse_quote};

use super::*;
use crate::{nested::FacetRegistry, parse::ModuleArgs, testing::resolve_one};

const USER: &str = r#"
    pub struct Entity {
        #[facet(id)]
        pub key: i64,
        pub created_at: i64,
    }
    pub struct User {
        #[facet(flatten)]
        pub base: Entity,
        pub id: i64,
        /// Display name.
        #[serde(rename = "userName")]
        #[validate(length(min = 1))]
        pub name: String,
        #[facet(required)]
        #[serde(skip)]
        pub password: String,
        #[facet(init_only)]
        pub email: String,
        pub(crate) note: Option<String>,
        secret: String,
    }
"#;

fn names(model: &FacetTargetModel) -> Vec<&str> {
    model.members.iter().map(ResolvedMember::name).collect()
}

fn member<'m>(model: &'m FacetTargetModel, name: &str) -> Option<&'m ResolvedMember> {
    model.members.iter().find(|member| member.name() == name)
}

fn ty(model: &FacetTargetModel, name: &str) -> String {
    member(model, name)
        .map(|member| member.ty.to_token_stream().to_string().replace(' ', ""))
        .unwrap_or_default()
}

#[test]
fn excluded_required_member_is_set_aside() {
    let model = resolve_one(USER, "#[facet(source = \"User\", exclude(password))] pub struct UserDto;");
    assert_eq!(names(&model), vec!["id", "name", "email", "key", "created_at"]);
    let excluded: Vec<&str> = model
        .excluded_required
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(excluded, vec!["password"]);
}

#[test]
fn include_and_exclude_are_complementary() {
    let included = resolve_one(USER, "#[facet(source = \"User\", include(id, name))] pub struct A;");
    let excluded = resolve_one(
        USER,
        "#[facet(source = \"User\", exclude(id, name))] pub struct B;"
    );
    assert_eq!(names(&included), vec!["id", "name"]);
    for name in names(&excluded) {
        assert!(!names(&included).contains(&name));
    }
    assert_eq!(names(&included).len() + names(&excluded).len(), 6);
}

#[test]
fn restricted_members_need_include_fields() {
    let without = resolve_one(USER, "#[facet(source = \"User\")] pub struct A;");
    assert!(member(&without, "note").is_none());
    let with = resolve_one(USER, "#[facet(source = \"User\", include_fields)] pub struct B;");
    assert!(member(&with, "note").is_some());
    assert!(member(&with, "secret").is_none());
}

#[test]
fn hand_written_field_wins() {
    let model = resolve_one(
        USER,
        "#[facet(source = \"User\")] pub struct UserDto { pub password: u8 }"
    );
    assert!(member(&model, "password").is_none());
    assert_eq!(model.excluded_required.len(), 1);
    assert_eq!(model.user_fields.len(), 1);
}

#[test]
fn nullable_wrapping_is_idempotent() {
    let model = resolve_one(
        USER,
        "#[facet(source = \"User\", include_fields, nullable)] pub struct UserPatch;"
    );
    assert_eq!(ty(&model, "name"), "::core::option::Option<String>");
    assert_eq!(ty(&model, "note"), "Option<String>");
    assert!(member(&model, "name").is_some_and(|member| member.nullable_wrapped));
    assert!(member(&model, "note").is_some_and(|member| !member.nullable_wrapped));
}

#[test]
fn identity_policies() {
    let table_items: Vec<Item> = syn::parse_file(USER).unwrap().items;
    let table = SymbolTable::from_items(&table_items);
    let registry = FacetRegistry::default();
    let runtime = ModuleArgs::default().runtime;
    let cx = ResolveContext {
        table:       &table,
        registry:    &registry,
        runtime:     &runtime,
        module_path: &[]
    };
    let item: ItemStruct = parse_quote! {
        #[facet(source = "User")]
        pub struct UserDto;
    };
    let mut decl = TargetDecl::from_item(&item).unwrap();

    decl.spec.options.identity = IdentityPolicy::Drop;
    let dropped = resolve_target(&decl, &cx).unwrap();
    assert!(member(&dropped, "id").is_none());
    assert!(member(&dropped, "key").is_none());
    assert!(member(&dropped, "name").is_some());

    decl.spec.options.identity = IdentityPolicy::Optional;
    let optional = resolve_target(&decl, &cx).unwrap();
    assert_eq!(ty(&optional, "id"), "::core::option::Option<i64>");
    assert_eq!(ty(&optional, "name"), "String");
}

#[test]
fn preservation_defaults_follow_kind() {
    let plain = resolve_one(USER, "#[facet(source = \"User\")] pub struct UserDto;");
    assert!(plain.members.iter().all(|member| !member.init_only && !member.required));

    let record = resolve_one(USER, "#[facet(source = \"User\", record)] pub struct UserRecord;");
    assert!(member(&record, "email").is_some_and(|member| member.init_only));
    assert!(member(&record, "password").is_some_and(|member| member.required));
    assert!(record.is_init_only_heavy());

    let relaxed = resolve_one(
        USER,
        "#[facet(source = \"User\", record, preserve_init_only = false)] pub struct UserRecord;"
    );
    assert!(!relaxed.is_init_only_heavy());
}

#[test]
fn decorations_are_copied_only_when_requested() {
    let plain = resolve_one(USER, "#[facet(source = \"User\")] pub struct UserDto;");
    assert!(plain.members.iter().all(|member| member.decorations.is_empty()));

    let copied = resolve_one(
        USER,
        "#[facet(source = \"User\", exclude(password), copy_attributes)] pub struct UserDto;"
    );
    let name = member(&copied, "name").map(|member| member.decorations.len());
    assert_eq!(name, Some(2));
    let all: String = copied
        .members
        .iter()
        .flat_map(|member| member.decorations.iter())
        .map(|decoration| decoration.to_token_stream().to_string())
        .collect();
    assert!(!all.contains("skip"));
    assert!(!all.contains("facet"));
}

#[test]
fn positional_targets_drop_named_only_decorations() {
    let model = resolve_one(
        USER,
        "#[facet(source = \"User\", include(name), copy_attributes)] pub struct UserTuple();"
    );
    let decorations: Vec<String> = member(&model, "name")
        .map(|member| {
            member
                .decorations
                .iter()
                .map(|decoration| decoration.path.to_token_stream().to_string())
                .collect()
        })
        .unwrap_or_default();
    assert!(decorations.is_empty());
}

#[test]
fn generic_target_is_rejected() {
    let table_items: Vec<Item> = syn::parse_file(USER).unwrap().items;
    let table = SymbolTable::from_items(&table_items);
    let registry = FacetRegistry::default();
    let runtime = ModuleArgs::default().runtime;
    let cx = ResolveContext {
        table:       &table,
        registry:    &registry,
        runtime:     &runtime,
        module_path: &[]
    };
    let item: ItemStruct = parse_quote! {
        #[facet(source = "User")]
        pub struct Wrapper<T>(T);
    };
    let decl = TargetDecl::from_item(&item).unwrap();
    assert_eq!(
        resolve_target(&decl, &cx).unwrap_err(),
        ResolveError::GenericTarget {
            target: "Wrapper".into()
        }
    );
}

#[test]
fn missing_source_is_a_fault() {
    let table_items: Vec<Item> = Vec::new();
    let table = SymbolTable::from_items(&table_items);
    let registry = FacetRegistry::default();
    let runtime = ModuleArgs::default().runtime;
    let cx = ResolveContext {
        table:       &table,
        registry:    &registry,
        runtime:     &runtime,
        module_path: &[]
    };
    let item: ItemStruct = parse_quote! {
        #[facet(source = "Ghost")]
        pub struct GhostDto;
    };
    let decl = TargetDecl::from_item(&item).unwrap();
    assert!(matches!(
        resolve_target(&decl, &cx),
        Err(ResolveError::SourceNotFound { .. })
    ));
}

#[test]
fn file_name_uses_module_path_when_qualified() {
    let model = resolve_one(
        USER,
        "#[facet(source = \"User\", qualified_file_name)] pub struct UserDto;"
    );
    assert_eq!(model.file_name, "domain__user_dto.rs");
}

const ORDER: &str = r#"
    pub struct Line { pub sku: u32 }
    #[facet(source = "Line")]
    pub struct LineDto;
    pub struct Order {
        pub first: Line,
        pub rest: Vec<Line>,
        pub spare: Option<Line>,
        pub total: u64,
    }
"#;

#[test]
fn nullable_attribute_leaves_nested_members_unwrapped() {
    let model = resolve_one(
        ORDER,
        "#[facet(source = \"Order\", nested(LineDto), nullable)] pub struct OrderPatch;"
    );
    assert_eq!(ty(&model, "first"), "LineDto");
    assert_eq!(ty(&model, "rest"), "::std::vec::Vec<LineDto>");
    assert_eq!(ty(&model, "total"), "::core::option::Option<u64>");
}

#[test]
fn query_overlay_wraps_nested_members_too() {
    let table_items: Vec<Item> = syn::parse_file(ORDER).unwrap().items;
    let table = SymbolTable::from_items(&table_items);
    let mut registry = FacetRegistry::builder();
    registry.register(&parse_quote!(LineDto), &parse_quote!(Line));
    let registry = registry.build();
    let runtime = ModuleArgs::default().runtime;
    let cx = ResolveContext {
        table:       &table,
        registry:    &registry,
        runtime:     &runtime,
        module_path: &[]
    };
    let item: ItemStruct = parse_quote! {
        #[facet(source = "Order", nested(LineDto))]
        pub struct OrderQuery;
    };
    let mut decl = TargetDecl::from_item(&item).unwrap();
    decl.spec.options.nullable = NullablePolicy::Everything;

    let model = resolve_target(&decl, &cx).unwrap();
    assert_eq!(ty(&model, "first"), "::core::option::Option<LineDto>");
    assert_eq!(ty(&model, "rest"), "::core::option::Option<::std::vec::Vec<LineDto>>");
    assert_eq!(ty(&model, "spare"), "::core::option::Option<LineDto>");
    assert!(member(&model, "first").is_some_and(|member| member.nullable_wrapped));
    assert!(member(&model, "spare").is_some_and(|member| !member.nullable_wrapped));
}
