// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Per-field extraction rule tables for the Tiki marketplace.
//!
//! Each table is ordered most-specific first with a generic fallback last.
//! Marketplace markup changes frequently and inconsistently across page
//! variants; the ordered fallback chain tolerates partial drift without
//! failing the whole extraction.

use crate::crawler::extract::FieldRule;

/// Path segment that identifies a product detail link.
pub const PRODUCT_PATH_MARKER: &str = "/p/";

/// Product title on a detail page.
pub const TITLE_RULES: &[FieldRule] = &[
    FieldRule::text(r#"h1[data-view-id="pdp_details_view_name"]"#),
    FieldRule::text("h1.title"),
    FieldRule::text(".header h1"),
    FieldRule::text("h1"),
];

/// Current price on a detail page (localized currency text).
pub const PRICE_RULES: &[FieldRule] = &[
    FieldRule::text(".product-price__current-price"),
    FieldRule::text(r#"[data-view-id="pdp_details_view_price"] .price-discount__price"#),
    FieldRule::text(".price-discount__price"),
    FieldRule::text(".current-price"),
    FieldRule::text(r#"[class*="price"]"#),
];

/// Primary product image on a detail page.
pub const IMAGE_RULES: &[FieldRule] = &[
    FieldRule::attr(".product-image img", "src"),
    FieldRule::attr(r#"[data-view-id="pdp_main_image"] img"#, "src"),
    FieldRule::attr(".main-image img", "src"),
    FieldRule::attr(".product-images img", "src"),
];

/// Seller/shop name on a detail page.
pub const SELLER_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[data-view-id="pdp_details_view_merchant"] a"#),
    FieldRule::text(".seller-name"),
    FieldRule::text(".shop-name"),
    FieldRule::text(r#"[class*="seller"] a"#),
    FieldRule::text(r#"[class*="store"] a"#),
];

/// Product detail links on a listing page. Unlike the scalar fields, every
/// rule contributes to the collected set.
pub const PRODUCT_LINK_RULES: &[FieldRule] = &[
    FieldRule::attr(r#"a[data-view-id="pdp_main_image"]"#, "href"),
    FieldRule::attr(r#"a[href*="/p/"]"#, "href"),
    FieldRule::attr(".product-item a", "href"),
    FieldRule::attr(r#"[data-view-content="product"] a"#, "href"),
];

/// Pagination "next" control on a listing page.
pub const NEXT_PAGE_RULES: &[&str] = &[
    r#"a[aria-label="Next page"]"#,
    ".next-page",
    ".pagination-next",
    r#"[class*="next"]"#,
];
