// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// One product scraped from a marketplace detail page
///
/// Created by the page crawler on successful extraction and consumed
/// immediately by the caller; never mutated after creation. A record is only
/// emitted when the title is non-empty and the price is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedProduct {
    /// Raw product title as displayed on the detail page
    pub title: String,
    /// Price in the smallest currency unit (đồng)
    pub price: i64,
    /// Absolute URL of the primary product image
    pub image_url: String,
    /// Absolute URL of the detail page, unique within one crawl
    pub product_url: String,
    /// Seller or shop name shown on the detail page
    pub seller_name: String,
}
