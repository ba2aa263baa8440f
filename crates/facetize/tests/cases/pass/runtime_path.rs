// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod runtime {
    pub use facetize::*;
}

#[facetize::facets(crate = "crate::runtime")]
mod domain {
    pub struct Point {
        pub x: i32,
        pub y: i32
    }

    #[facet(source = "Point", include(x))]
    pub struct PointX;
}

fn main() {
    use runtime::Facet;

    let point = domain::Point { x: 3, y: 4 };
    let facet = <domain::PointX as Facet>::project(&point);
    assert_eq!(facet.x, 3);
    assert_eq!(facet.back_to().y, 0);
}
