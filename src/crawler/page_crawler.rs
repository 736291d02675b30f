// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::crawler::extract::{
    collect_product_links, find_next_control, locate_field,
};
use crate::crawler::rules;
use crate::crawler::session::{BrowserSession, CdpSession, CrawlError, PageHandle, SessionConfig};
use crate::domain::models::product::ScrapedProduct;
use crate::domain::normalize::{normalize_price, normalize_url};

/// Crawl loop tuning
#[derive(Debug, Clone)]
pub struct CrawlerOptions {
    /// Maximum number of listing pages to visit
    pub max_pages: u32,
    /// Delay after a navigation before reading the page
    pub settle_delay: Duration,
    /// Politeness delay between product fetches
    pub product_delay: Duration,
    /// Politeness delay between listing pages
    pub page_delay: Duration,
    /// Upper bound for opening one product page
    pub product_timeout: Duration,
    /// Marketplace base, e.g. "https://tiki.vn"
    pub base_url: String,
    /// Seller name used when a detail page exposes none
    pub default_seller: String,
}

/// Crawls one marketplace search, page by page, product by product.
///
/// Owns at most one browser session. `init()` must be called before
/// scraping; `close()` releases the session and is idempotent.
pub struct PageCrawler {
    session: Option<Box<dyn BrowserSession>>,
    session_config: SessionConfig,
    options: CrawlerOptions,
}

impl PageCrawler {
    /// Create an uninitialized crawler that will launch its own browser.
    pub fn new(session_config: SessionConfig, options: CrawlerOptions) -> Self {
        Self {
            session: None,
            session_config,
            options,
        }
    }

    /// Create a crawler over an already-running session (used by tests).
    pub fn with_session(session: Box<dyn BrowserSession>, options: CrawlerOptions) -> Self {
        Self {
            session: Some(session),
            session_config: SessionConfig::default(),
            options,
        }
    }

    /// Launch the browser session. A no-op when already initialized.
    pub async fn init(&mut self) -> Result<(), CrawlError> {
        if self.session.is_none() {
            let session = CdpSession::launch(self.session_config.clone()).await?;
            self.session = Some(Box::new(session));
        }
        Ok(())
    }

    /// Release the browser session. Safe to call at any time, repeatedly.
    pub async fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close().await.ok();
        }
    }

    /// Crawl a search results URL and return the extracted records.
    ///
    /// Records are returned in discovery order: listing order first, then
    /// pagination order. Per-product and per-listing failures are logged and
    /// skipped; only an uninitialized session is an error here.
    pub async fn scrape_search_results(
        &self,
        search_url: &str,
    ) -> Result<Vec<ScrapedProduct>, CrawlError> {
        let session = self.session.as_deref().ok_or(CrawlError::NotInitialized)?;

        info!(url = %search_url, "navigating to search results");
        let listing = match session.open_page(search_url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %search_url, "failed to open listing page: {e}");
                return Ok(Vec::new());
            }
        };
        sleep(self.options.settle_delay).await;

        let records = self.crawl_listing(session, listing.as_ref()).await;
        listing.close().await.ok();

        Ok(records)
    }

    async fn crawl_listing(
        &self,
        session: &dyn BrowserSession,
        listing: &dyn PageHandle,
    ) -> Vec<ScrapedProduct> {
        let mut records = Vec::new();
        let mut seen_urls: HashSet<String> = HashSet::new();
        let mut current_page = 1u32;

        loop {
            let links = match listing.html().await {
                Ok(html) => {
                    let doc = Html::parse_document(&html);
                    collect_product_links(
                        &doc,
                        rules::PRODUCT_LINK_RULES,
                        &self.options.base_url,
                        rules::PRODUCT_PATH_MARKER,
                    )
                }
                Err(e) => {
                    // A broken listing page degrades to "zero links found".
                    warn!(page = current_page, "failed to read listing page: {e}");
                    Vec::new()
                }
            };
            info!(page = current_page, links = links.len(), "extracted product links");

            for link in links {
                if !seen_urls.insert(link.clone()) {
                    debug!(url = %link, "already scraped this crawl, skipping");
                    continue;
                }
                match self.scrape_product(session, &link).await {
                    Ok(Some(record)) => records.push(record),
                    Ok(None) => {}
                    Err(e) => warn!(url = %link, "skipping product: {e}"),
                }
                sleep(self.options.product_delay).await;
            }

            if current_page >= self.options.max_pages {
                break;
            }
            if !self.advance_to_next(listing).await {
                info!(page = current_page, "no more listing pages");
                break;
            }
            sleep(self.options.page_delay).await;
            current_page += 1;
        }

        records
    }

    /// Scrape one product detail page.
    ///
    /// The page is closed whether extraction succeeded or failed. `Ok(None)`
    /// means the record was dropped (missing title or price).
    async fn scrape_product(
        &self,
        session: &dyn BrowserSession,
        url: &str,
    ) -> Result<Option<ScrapedProduct>, CrawlError> {
        debug!(url, "scraping product page");
        let page = timeout(self.options.product_timeout, session.open_page(url))
            .await
            .map_err(|_| CrawlError::Timeout)??;

        sleep(self.options.settle_delay).await;

        let result = match page.html().await {
            Ok(html) => Ok(extract_product(&html, url, &self.options.default_seller)),
            Err(e) => Err(e),
        };
        page.close().await.ok();
        result
    }

    /// Try to advance the listing page to the next results page.
    ///
    /// Returns false when pagination is exhausted: no next control, a
    /// disabled one, or a failed click. All of these end the crawl cleanly.
    async fn advance_to_next(&self, listing: &dyn PageHandle) -> bool {
        let html = match listing.html().await {
            Ok(html) => html,
            Err(e) => {
                warn!("failed to read listing page for pagination: {e}");
                return false;
            }
        };
        let control = {
            let doc = Html::parse_document(&html);
            find_next_control(&doc, rules::NEXT_PAGE_RULES)
        };

        match control {
            Some((selector, false)) => match listing.click(selector).await {
                Ok(()) => {
                    listing.wait_for_navigation().await.ok();
                    true
                }
                Err(e) => {
                    warn!(selector, "failed to click next control: {e}");
                    false
                }
            },
            Some((selector, true)) => {
                debug!(selector, "next control is disabled");
                false
            }
            None => false,
        }
    }
}

/// Extract one record from a detail page snapshot.
///
/// Empty title or unparsable price drop the record; both are extraction
/// misses, not errors.
fn extract_product(html: &str, url: &str, default_seller: &str) -> Option<ScrapedProduct> {
    let doc = Html::parse_document(html);

    let title = locate_field(&doc, rules::TITLE_RULES);
    if title.is_empty() {
        debug!(url, "no title found, dropping record");
        return None;
    }

    let price = normalize_price(&locate_field(&doc, rules::PRICE_RULES));
    if price <= 0 {
        debug!(url, "no valid price found, dropping record");
        return None;
    }

    let image_url = {
        let raw = locate_field(&doc, rules::IMAGE_RULES);
        if raw.is_empty() {
            raw
        } else {
            normalize_url(&raw, Some(url))
        }
    };

    let seller_name = {
        let raw = locate_field(&doc, rules::SELLER_RULES);
        if raw.is_empty() {
            default_seller.to_string()
        } else {
            raw
        }
    };

    Some(ScrapedProduct {
        title,
        price,
        image_url,
        product_url: url.to_string(),
        seller_name,
    })
}
