// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[facetize::facets]
mod domain {
    pub struct Order {
        pub id: i64,
        pub total: u64,
        pub note: String
    }

    #[facet(source = "Order")]
    #[derive(Default)]
    pub struct OrderView {
        pub note: Option<String>,
        pub seen: bool
    }

    impl OrderView {
        pub fn back_to(&self) -> Order {
            Order {
                id: self.id,
                total: self.total,
                note: self.note.clone().unwrap_or_default(),
            }
        }
    }

    impl From<&Order> for OrderView {
        fn from(source: &Order) -> Self {
            let mut view = Self::new(source);
            view.note = Some(source.note.clone());
            view
        }
    }
}

fn main() {
    let order = domain::Order {
        id: 1,
        total: 250,
        note: "gift".to_string(),
    };
    let view = domain::OrderView::from(&order);
    assert_eq!(view.total, 250);
    assert_eq!(view.note.as_deref(), Some("gift"));
    assert!(!view.seen);
    assert_eq!(view.back_to().note, "gift");
    assert_eq!(domain::OrderView::default().id, 0);
}
