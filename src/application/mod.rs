// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application module
///
/// Use cases wiring the domain and the crawler together.
pub mod scrape_products;
