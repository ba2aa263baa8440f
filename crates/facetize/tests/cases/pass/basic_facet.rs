// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use facetize::prelude::*;

#[facetize::facets]
pub mod domain {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    pub struct User {
        pub id: Uuid,
        pub name: String,
        #[facet(required)]
        pub password: String,
        pub created_at: DateTime<Utc>,
        pub score: f64,
        pub initial: char,
        pub active: bool
    }

    #[facet(source = "User", exclude(password))]
    #[derive(Debug, Clone)]
    pub struct UserDto;
}

fn main() {
    let user = domain::User {
        id: uuid::Uuid::new_v4(),
        name: "John".to_string(),
        password: "secret".to_string(),
        created_at: chrono::Utc::now(),
        score: 1.5,
        initial: 'J',
        active: true,
    };

    let dto = domain::UserDto::new(&user);
    assert_eq!(dto.name, "John");

    let back = dto.back_to();
    assert_eq!(back.id, user.id);
    assert_eq!(back.password, "");

    let projected: domain::UserDto = user.to_facet();
    assert_eq!(projected.score, 1.5);

    let empty = domain::UserDto::default();
    assert!(empty.id.is_nil());
    assert_eq!(empty.initial, '\0');
    assert!(!empty.active);
}
