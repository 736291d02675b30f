// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Sink module
///
/// The persistence collaborator's contract: scraped records go in, a report
/// with per-record error isolation comes out. The core never depends on how
/// a sink stores anything.
pub mod memory;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::models::product::ScrapedProduct;

/// Outcome of saving one batch of scraped records
#[derive(Debug, Default, Serialize)]
pub struct SaveReport {
    /// Number of records whose product was upserted
    pub saved_products: usize,
    /// Number of records whose offer was upserted
    pub saved_offers: usize,
    /// One message per record that could not be saved
    pub errors: Vec<String>,
}

/// Persistence collaborator contract
///
/// Each record is independently normalized and upserted; a failure saving
/// one record must not abort the rest, and failures are reported as error
/// strings rather than raised.
#[async_trait]
pub trait ProductSink: Send + Sync {
    async fn save(&self, records: &[ScrapedProduct], shop_domain: &str) -> SaveReport;
}
