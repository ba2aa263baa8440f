// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[facetize::facets]
mod shop {
    #[facet_dtos]
    pub struct Item {
        pub id: u64,
        pub title: String,
        pub stock: u32
    }
}

fn main() {
    let item = shop::Item {
        id: 1,
        title: "Pen".to_string(),
        stock: 10,
    };

    let create = shop::CreateItemRequest::new(&item);
    let _update = shop::UpdateItemRequest::new(&item);
    let upsert = shop::UpsertItemRequest::new(&item);
    let response = shop::ItemResponse::new(&item);
    let query = shop::ItemQuery::new(&item);

    assert_eq!(create.title, "Pen");
    assert_eq!(upsert.id, Some(1));
    assert_eq!(response.stock, 10);
    assert_eq!(query.stock, Some(10));
    assert_eq!(format!("{:?}", create.clone()), format!("{:?}", create));
}
