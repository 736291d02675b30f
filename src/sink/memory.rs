// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

use crate::domain::models::product::ScrapedProduct;
use crate::domain::normalize::normalize_title;
use crate::domain::shops::shop_display_name;
use crate::sink::{ProductSink, SaveReport};

/// A marketplace shop
#[derive(Debug, Clone, Serialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
}

/// A canonical product, deduplicated by its normalized name
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: Uuid,
    /// Canonical name derived from brand, model and storage
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub storage: Option<String>,
    /// Primary image URL, refreshed whenever a record carries one
    pub image: String,
    /// Raw title of the record that created this product
    pub raw_title: String,
    pub is_official: bool,
    pub updated_at: DateTime<Utc>,
}

/// One shop's offer for one product
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    pub id: Uuid,
    pub product_id: Uuid,
    pub shop_id: Uuid,
    /// Price in the smallest currency unit
    pub price: i64,
    pub url: String,
    pub last_checked_at: DateTime<Utc>,
}

/// Entity counts exposed by the sink
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SinkStats {
    pub products: usize,
    pub offers: usize,
    pub shops: usize,
}

#[derive(Default)]
struct SinkState {
    shops: HashMap<String, Shop>,
    products: HashMap<String, Product>,
    offers: HashMap<(Uuid, Uuid), Offer>,
}

/// In-memory reference sink
///
/// Mirrors the upsert semantics a database-backed collaborator is expected
/// to have: shops keyed by domain, products keyed by canonical name, offers
/// keyed by (product, shop). Useful for tests and dry runs.
#[derive(Default)]
pub struct MemorySink {
    state: Mutex<SinkState>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entity counts.
    pub fn stats(&self) -> SinkStats {
        let state = self.state.lock();
        SinkStats {
            products: state.products.len(),
            offers: state.offers.len(),
            shops: state.shops.len(),
        }
    }

    /// Snapshot of all products, unordered.
    pub fn products(&self) -> Vec<Product> {
        self.state.lock().products.values().cloned().collect()
    }

    /// Snapshot of all offers, unordered.
    pub fn offers(&self) -> Vec<Offer> {
        self.state.lock().offers.values().cloned().collect()
    }
}

impl SinkState {
    fn upsert_shop(&mut self, domain: &str) -> Uuid {
        if let Some(shop) = self.shops.get(domain) {
            return shop.id;
        }
        let shop = Shop {
            id: Uuid::new_v4(),
            name: shop_display_name(domain).to_string(),
            domain: domain.to_string(),
        };
        let id = shop.id;
        self.shops.insert(domain.to_string(), shop);
        id
    }

    fn upsert_product(&mut self, record: &ScrapedProduct) -> Uuid {
        let normalized = normalize_title(&record.title);
        if let Some(product) = self.products.get_mut(&normalized.canonical_name) {
            if !record.image_url.is_empty() {
                product.image = record.image_url.clone();
            }
            product.updated_at = Utc::now();
            return product.id;
        }
        let product = Product {
            id: Uuid::new_v4(),
            name: normalized.canonical_name.clone(),
            brand: normalized.brand,
            model: normalized.model,
            storage: normalized.storage,
            image: record.image_url.clone(),
            raw_title: record.title.clone(),
            is_official: normalized.is_official,
            updated_at: Utc::now(),
        };
        let id = product.id;
        self.products.insert(normalized.canonical_name, product);
        id
    }

    fn upsert_offer(&mut self, product_id: Uuid, shop_id: Uuid, record: &ScrapedProduct) {
        let offer = self
            .offers
            .entry((product_id, shop_id))
            .or_insert_with(|| Offer {
                id: Uuid::new_v4(),
                product_id,
                shop_id,
                price: record.price,
                url: record.product_url.clone(),
                last_checked_at: Utc::now(),
            });
        offer.price = record.price;
        offer.url = record.product_url.clone();
        offer.last_checked_at = Utc::now();
    }
}

#[async_trait]
impl ProductSink for MemorySink {
    async fn save(&self, records: &[ScrapedProduct], shop_domain: &str) -> SaveReport {
        let mut report = SaveReport::default();
        let mut state = self.state.lock();
        let shop_id = state.upsert_shop(shop_domain);

        for record in records {
            // Record invariants are enforced per record, never for the batch.
            if record.title.trim().is_empty() {
                let message = format!(
                    "error saving product {:?}: empty title",
                    record.product_url
                );
                warn!("{message}");
                report.errors.push(message);
                continue;
            }
            if record.price <= 0 {
                let message = format!(
                    "error saving product {:?}: non-positive price {}",
                    record.title, record.price
                );
                warn!("{message}");
                report.errors.push(message);
                continue;
            }

            let product_id = state.upsert_product(record);
            report.saved_products += 1;

            state.upsert_offer(product_id, shop_id, record);
            report.saved_offers += 1;
        }

        report
    }
}
