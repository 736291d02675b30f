// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Scripted fake browser session for exercising the crawl loop without a
//! real browser engine.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sosanhgia::crawler::page_crawler::CrawlerOptions;
use sosanhgia::crawler::session::{BrowserSession, CrawlError, PageHandle};

/// The pages a fake crawl can see, plus counters for assertions.
pub struct FakeWorld {
    /// URL the listing page is served under
    pub listing_url: String,
    /// One HTML snapshot per pagination step; clicking "next" advances
    pub listing_pages: Vec<String>,
    /// Detail pages by URL; `None` simulates a navigation failure
    pub products: HashMap<String, Option<String>>,
    listing_index: AtomicUsize,
    clicks: Mutex<Vec<String>>,
    closes: AtomicUsize,
}

impl FakeWorld {
    pub fn new(listing_url: &str, listing_pages: Vec<String>) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            listing_pages,
            products: HashMap::new(),
            listing_index: AtomicUsize::new(0),
            clicks: Mutex::new(Vec::new()),
            closes: AtomicUsize::new(0),
        }
    }

    pub fn with_product(mut self, url: &str, html: &str) -> Self {
        self.products.insert(url.to_string(), Some(html.to_string()));
        self
    }

    pub fn with_failing_product(mut self, url: &str) -> Self {
        self.products.insert(url.to_string(), None);
        self
    }

    /// Selectors clicked on the listing page, in order.
    pub fn clicks(&self) -> Vec<String> {
        self.clicks.lock().clone()
    }

    /// How many times the session was closed.
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

pub struct FakeSession {
    pub world: Arc<FakeWorld>,
}

#[async_trait]
impl BrowserSession for FakeSession {
    async fn open_page(&self, url: &str) -> Result<Box<dyn PageHandle>, CrawlError> {
        if url == self.world.listing_url {
            return Ok(Box::new(FakeListingPage {
                world: self.world.clone(),
            }));
        }
        match self.world.products.get(url) {
            Some(Some(html)) => Ok(Box::new(FakeProductPage { html: html.clone() })),
            Some(None) => Err(CrawlError::Navigation(format!("simulated timeout for {url}"))),
            None => Err(CrawlError::Navigation(format!("unexpected url {url}"))),
        }
    }

    async fn close(&mut self) -> Result<(), CrawlError> {
        self.world.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FakeListingPage {
    world: Arc<FakeWorld>,
}

#[async_trait]
impl PageHandle for FakeListingPage {
    async fn html(&self) -> Result<String, CrawlError> {
        let index = self.world.listing_index.load(Ordering::SeqCst);
        Ok(self.world.listing_pages[index].clone())
    }

    async fn click(&self, selector: &str) -> Result<(), CrawlError> {
        self.world.clicks.lock().push(selector.to_string());
        let index = self.world.listing_index.load(Ordering::SeqCst);
        if index + 1 < self.world.listing_pages.len() {
            self.world.listing_index.store(index + 1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<(), CrawlError> {
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), CrawlError> {
        Ok(())
    }
}

struct FakeProductPage {
    html: String,
}

#[async_trait]
impl PageHandle for FakeProductPage {
    async fn html(&self) -> Result<String, CrawlError> {
        Ok(self.html.clone())
    }

    async fn click(&self, _selector: &str) -> Result<(), CrawlError> {
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<(), CrawlError> {
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), CrawlError> {
        Ok(())
    }
}

/// Pagination control flavor for listing fixtures.
pub enum Next {
    None,
    Enabled,
    Disabled,
}

/// Listing page fixture with product anchors and an optional next control.
pub fn listing_html(product_paths: &[&str], next: Next) -> String {
    let anchors: String = product_paths
        .iter()
        .map(|path| format!(r#"<a href="{path}">product</a>"#))
        .collect();
    let next_control = match next {
        Next::None => String::new(),
        Next::Enabled => r##"<a aria-label="Next page" href="#">Tiếp</a>"##.to_string(),
        Next::Disabled => {
            r##"<a aria-label="Next page" class="disabled" href="#">Tiếp</a>"##.to_string()
        }
    };
    format!("<html><body>{anchors}{next_control}</body></html>")
}

/// Detail page fixture with the fields the extractor looks for.
pub fn product_html(title: &str, price_text: &str, seller: &str) -> String {
    format!(
        r#"<html><body>
            <h1 data-view-id="pdp_details_view_name">{title}</h1>
            <div class="price-discount__price">{price_text}</div>
            <div class="product-image"><img src="//cdn.tiki.vn/images/item.jpg"></div>
            <div class="seller-name">{seller}</div>
        </body></html>"#
    )
}

/// Crawl options with zero politeness delays, for fast tests.
pub fn test_options(max_pages: u32) -> CrawlerOptions {
    CrawlerOptions {
        max_pages,
        settle_delay: Duration::ZERO,
        product_delay: Duration::ZERO,
        page_delay: Duration::ZERO,
        product_timeout: Duration::from_secs(5),
        base_url: "https://tiki.vn".to_string(),
        default_seller: "Tiki".to_string(),
    }
}
