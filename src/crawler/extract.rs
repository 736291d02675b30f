// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Ordered-fallback field extraction over a queryable document.
//!
//! The lookup logic is pure and runs against anything implementing
//! [`QueryDocument`], so it can be exercised with HTML fixtures without a
//! browser. Live pages are snapshotted via CDP and parsed into the same
//! [`scraper::Html`] type the tests use.

use scraper::{Html, Selector};

use crate::domain::normalize::normalize_url;

/// One candidate lookup for a field: text content when `attr` is `None`,
/// an attribute value otherwise.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub selector: &'static str,
    pub attr: Option<&'static str>,
}

impl FieldRule {
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            attr: None,
        }
    }

    pub const fn attr(selector: &'static str, attr: &'static str) -> Self {
        Self {
            selector,
            attr: Some(attr),
        }
    }
}

/// Queryable document capability.
///
/// The small surface the extraction strategy needs from a rendered page.
pub trait QueryDocument {
    /// Trimmed text content of the first element matching `selector`.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// First non-empty `attr` value among elements matching `selector`.
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// All `attr` values among elements matching `selector`, in document order.
    fn all_attrs(&self, selector: &str, attr: &str) -> Vec<String>;

    /// `Some(disabled)` when an element matches `selector`, `None` otherwise.
    fn control_state(&self, selector: &str) -> Option<bool>;
}

impl QueryDocument for Html {
    fn first_text(&self, selector: &str) -> Option<String> {
        // Invalid selectors are skipped, same as a failed lookup.
        let selector = Selector::parse(selector).ok()?;
        self.select(&selector)
            .next()
            .map(|element| element.text().collect::<Vec<_>>().join(" ").trim().to_string())
    }

    fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.select(&selector)
            .find_map(|element| element.value().attr(attr))
            .map(|value| value.trim().to_string())
    }

    fn all_attrs(&self, selector: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }

    fn control_state(&self, selector: &str) -> Option<bool> {
        let selector = Selector::parse(selector).ok()?;
        self.select(&selector).next().map(|element| {
            let value = element.value();
            value.attr("disabled").is_some()
                || value.classes().any(|class| class == "disabled")
                || value.attr("aria-disabled") == Some("true")
        })
    }
}

/// Apply the rules in order and return the first non-empty match.
///
/// Returns an empty string when no rule matches; "not found" is never an
/// error at this layer.
pub fn locate_field(doc: &dyn QueryDocument, rules: &[FieldRule]) -> String {
    for rule in rules {
        let value = match rule.attr {
            Some(attr) => doc.first_attr(rule.selector, attr),
            None => doc.first_text(rule.selector),
        };
        if let Some(value) = value {
            if !value.is_empty() {
                return value;
            }
        }
    }
    String::new()
}

/// Collect product detail links from a listing page.
///
/// Every rule contributes (not first-match-wins). Hrefs are filtered to the
/// marketplace's product path, absolutized against `base_url` and
/// de-duplicated preserving first-seen order.
pub fn collect_product_links(
    doc: &dyn QueryDocument,
    rules: &[FieldRule],
    base_url: &str,
    path_marker: &str,
) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for rule in rules {
        let attr = rule.attr.unwrap_or("href");
        for href in doc.all_attrs(rule.selector, attr) {
            if !href.contains(path_marker) {
                continue;
            }
            let absolute = if href.starts_with("http") {
                href
            } else {
                normalize_url(&href, Some(base_url))
            };
            if !links.contains(&absolute) {
                links.push(absolute);
            }
        }
    }
    links
}

/// Locate the pagination "next" control.
///
/// Returns the first selector with a present element together with its
/// disabled state, or `None` when no control exists on the page.
pub fn find_next_control(
    doc: &dyn QueryDocument,
    selectors: &[&'static str],
) -> Option<(&'static str, bool)> {
    selectors
        .iter()
        .find_map(|selector| doc.control_state(selector).map(|disabled| (*selector, disabled)))
}
