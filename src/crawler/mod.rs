// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Crawler module
///
/// Implements the marketplace crawl pipeline:
/// - extraction (extract): ordered-fallback field lookup over a document
/// - rules (rules): the per-field selector tables for the marketplace
/// - session (session): browser session seam and its CDP implementation
/// - page crawler (page_crawler): pagination and per-product orchestration
pub mod extract;
pub mod page_crawler;
pub mod rules;
pub mod session;
