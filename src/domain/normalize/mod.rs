// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Title normalization engine.
//!
//! Pure, total functions that map raw scraped text to canonical product
//! attributes, prices and URLs. Every function degrades to `None`, `false`
//! or `0` instead of failing, so normalization can never abort a crawl.

use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use url::Url;

mod patterns;

use patterns::{
    BRAND_RULES, GALAXY_RE, GENERIC_MODEL_RE, IPHONE_RE, OFFICIAL_KEYWORDS, STORAGE_RE, XIAOMI_RE,
};

/// Placeholder canonical name when brand, model and storage are all unknown.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Canonical attributes derived from one raw product title
///
/// A pure function of the title: recomputed every time, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAttributes {
    /// Deduplication-friendly name joined from brand, model and storage
    pub canonical_name: String,
    /// Canonical brand, when a known keyword appears in the title
    pub brand: Option<String>,
    /// Model designation, when one could be extracted
    pub model: Option<String>,
    /// Storage label such as "128GB", when one appears in the title
    pub storage: Option<String>,
    /// Whether the title carries an official/authorized marker
    pub is_official: bool,
}

/// Detect the canonical brand from a raw title.
///
/// Case-insensitive substring match against the ordered brand table; the
/// first table entry with any matching keyword wins.
pub fn detect_brand(title: &str) -> Option<&'static str> {
    let lower = title.to_lowercase();
    BRAND_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(brand, _)| *brand)
}

/// Extract the first storage capacity mentioned in the title.
///
/// Only the first match is reported, formatted as `{digits}{UNIT}` with the
/// unit uppercased. Later mentions (e.g. accessory storage) are ignored.
pub fn extract_storage(title: &str) -> Option<String> {
    STORAGE_RE
        .captures(title)
        .map(|caps| format!("{}{}", &caps[1], caps[2].to_uppercase()))
}

/// Extract a model designation from the title.
///
/// Brand-specific patterns take precedence; otherwise the generic fallback
/// takes the word-ish run immediately after the brand name, truncated to 50
/// characters. Model extraction is brand-gated: no brand, no model.
pub fn extract_model(title: &str, brand: Option<&str>) -> Option<String> {
    let brand = brand?;
    let lower = title.to_lowercase();
    let lower_brand = brand.to_lowercase();

    if lower_brand == "apple" && lower.contains("iphone") {
        if let Some(caps) = IPHONE_RE.captures(&lower) {
            return Some(format!("iPhone {}", caps[1].trim()));
        }
    }

    if lower_brand == "samsung" && lower.contains("galaxy") {
        if let Some(caps) = GALAXY_RE.captures(&lower) {
            return Some(format!("Galaxy {}", caps[1].trim()));
        }
    }

    if lower_brand == "xiaomi" {
        if let Some(caps) = XIAOMI_RE.captures(&lower) {
            return Some(format!("{} {}", &caps[1], caps[2].trim()));
        }
    }

    // Generic fallback: the text right after the first occurrence of the
    // brand name. Byte offsets come from the lowercased copy, so slice
    // defensively in case lowercasing shifted lengths.
    let idx = lower.find(&lower_brand)?;
    let after = title.get(idx + lower_brand.len()..)?.trim_start();
    let run = GENERIC_MODEL_RE.find(after)?;
    let model = run.as_str().trim();
    if model.is_empty() {
        return None;
    }
    Some(truncate_chars(model, 50).to_string())
}

/// Whether the title carries one of the official/authorized markers.
///
/// Matches case-insensitively against both the raw title and its
/// accent-folded form, so decomposed or partially accented spellings of
/// "chính hãng" are still recognized.
pub fn detect_official(title: &str) -> bool {
    let lower = title.to_lowercase();
    let folded = deunicode(&lower);
    OFFICIAL_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword) || folded.contains(keyword))
}

/// Join the known attributes into a canonical product name.
pub fn build_canonical_name(
    brand: Option<&str>,
    model: Option<&str>,
    storage: Option<&str>,
) -> String {
    let parts: Vec<&str> = [brand, model, storage].into_iter().flatten().collect();
    if parts.is_empty() {
        UNKNOWN_PRODUCT.to_string()
    } else {
        parts.join(" ")
    }
}

/// Normalize one raw product title into canonical attributes.
pub fn normalize_title(raw_title: &str) -> NormalizedAttributes {
    let brand = detect_brand(raw_title);
    let model = extract_model(raw_title, brand);
    let storage = extract_storage(raw_title);
    let is_official = detect_official(raw_title);
    let canonical_name = build_canonical_name(brand, model.as_deref(), storage.as_deref());

    NormalizedAttributes {
        canonical_name,
        brand: brand.map(str::to_string),
        model,
        storage,
        is_official,
    }
}

/// Parse localized price text into the smallest currency unit.
///
/// Strips currency symbols, thousands separators and whitespace, then parses
/// the leading digit run. Returns `0` when no price can be read; callers must
/// treat `0` as "no price found", not a real price.
pub fn normalize_price(raw_price_text: &str) -> i64 {
    let cleaned: String = raw_price_text
        .chars()
        .filter(|c| !matches!(c, '₫' | 'đ' | '.' | ',') && !c.is_whitespace())
        .collect();
    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().unwrap_or(0)
}

/// Resolve a possibly relative URL into an absolute one.
///
/// Absolute URLs pass through, protocol-relative URLs get an `https:` scheme,
/// root-relative paths resolve against the base URL's scheme and host.
/// Anything else, malformed input included, is returned unchanged.
pub fn normalize_url(raw_url: &str, base_url: Option<&str>) -> String {
    if raw_url.starts_with("http") {
        return raw_url.to_string();
    }
    if raw_url.starts_with("//") {
        return format!("https:{raw_url}");
    }
    if raw_url.starts_with('/') {
        if let Some(base) = base_url {
            if let Ok(parsed) = Url::parse(base) {
                if let Some(host) = parsed.host_str() {
                    let mut resolved = format!("{}://{}", parsed.scheme(), host);
                    if let Some(port) = parsed.port() {
                        resolved.push_str(&format!(":{port}"));
                    }
                    resolved.push_str(raw_url);
                    return resolved;
                }
            }
        }
    }
    raw_url.to_string()
}

/// Cut a string to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
