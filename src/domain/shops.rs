// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Display name for a known marketplace domain
///
/// Unknown domains map to themselves.
pub fn shop_display_name(domain: &str) -> &str {
    match domain {
        "tiki.vn" => "Tiki",
        "shopee.vn" => "Shopee",
        "lazada.vn" => "Lazada",
        "sendo.vn" => "Sendo",
        "thegioididong.com" => "Thế Giới Di Động",
        "cellphones.com.vn" => "CellphoneS",
        other => other,
    }
}
