// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered brand table: (canonical brand, keyword list).
///
/// Declaration order is the tie-break when a title happens to contain
/// keywords of more than one brand, so the order here is a contract.
pub(crate) const BRAND_RULES: &[(&str, &[&str])] = &[
    ("Apple", &["apple", "iphone", "ipad", "macbook", "airpods", "imac"]),
    ("Samsung", &["samsung", "galaxy"]),
    ("Xiaomi", &["xiaomi", "redmi", "poco", "mi "]),
    ("Oppo", &["oppo", "reno", "find"]),
    ("Vivo", &["vivo", "y series", "v series"]),
    ("Huawei", &["huawei", "mate", "p series"]),
    ("OnePlus", &["oneplus", "nord"]),
    ("Realme", &["realme"]),
    ("Nokia", &["nokia"]),
    ("LG", &["lg"]),
    ("Sony", &["sony", "xperia"]),
    ("Google", &["google", "pixel"]),
];

/// Official/authorized marker variants, accented and accent-folded.
pub(crate) const OFFICIAL_KEYWORDS: &[&str] = &[
    "chính hãng",
    "chinh hang",
    "official",
    "hàng chính hãng",
    "hang chinh hang",
    "authorized",
    "bảo hành chính hãng",
    "bao hanh chinh hang",
];

/// Capacity followed by a unit, optionally tagged with a disk kind.
pub(crate) static STORAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(gb|tb)(?:\s*(?:ssd|hdd))?").unwrap());

/// iPhone family: number plus optional tier suffixes.
pub(crate) static IPHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"iphone\s*(\d+\s*(?:pro|plus|mini|max)?(?:\s*max)?)").unwrap());

/// Galaxy family: letter-number series, Note or S models.
pub(crate) static GALAXY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"galaxy\s*([a-z]\d+|note\s*\d+|s\d+)").unwrap());

/// Xiaomi families. Word-bounded so the `mi` inside "xiaomi" never matches.
pub(crate) static XIAOMI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(redmi|poco|mi)\b\s*([a-z0-9][a-z0-9 ]*)").unwrap());

/// First contiguous word-ish run, used by the generic model fallback.
pub(crate) static GENERIC_MODEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s-]+").unwrap());
