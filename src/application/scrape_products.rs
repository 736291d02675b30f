// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Scrape orchestration: the sole entry point external collaborators call.

use tracing::info;

use crate::config::settings::Settings;
use crate::crawler::page_crawler::{CrawlerOptions, PageCrawler};
use crate::crawler::session::{CrawlError, SessionConfig};
use crate::domain::models::product::ScrapedProduct;
use crate::domain::shops::shop_display_name;

/// Build the query-encoded search URL for a marketplace domain.
pub fn build_search_url(shop_domain: &str, query: &str, page: u32) -> String {
    format!(
        "https://{}/search?q={}&page={}",
        shop_domain,
        urlencoding::encode(query),
        page
    )
}

/// Run one crawl for `query` and return the scraped records unmodified.
///
/// The crawler session has a scoped lifecycle: it is closed on every path,
/// including errors. No normalization or persistence happens here.
pub async fn scrape_products(
    query: &str,
    settings: &Settings,
) -> Result<Vec<ScrapedProduct>, CrawlError> {
    let search_url = build_search_url(&settings.marketplace.shop_domain, query, 1);

    let session_config = SessionConfig {
        headless: settings.crawler.headless,
        request_timeout: settings.crawler.request_timeout(),
        user_agent: settings.crawler.user_agent.clone(),
    };
    let options = crawler_options(settings)?;

    let mut crawler = PageCrawler::new(session_config, options);
    crawler.init().await?;

    info!(query, url = %search_url, "starting marketplace crawl");
    let result = crawler.scrape_search_results(&search_url).await;
    crawler.close().await;

    if let Ok(records) = &result {
        info!(records = records.len(), "crawl finished");
    }
    result
}

fn crawler_options(settings: &Settings) -> Result<CrawlerOptions, CrawlError> {
    let domain = settings.marketplace.shop_domain.trim();
    if domain.is_empty() || domain.contains('/') {
        return Err(CrawlError::InvalidConfig(format!(
            "not a marketplace domain: {domain:?}"
        )));
    }

    Ok(CrawlerOptions {
        max_pages: settings.crawler.max_pages.max(1),
        settle_delay: settings.crawler.settle_delay(),
        product_delay: settings.crawler.product_delay(),
        page_delay: settings.crawler.page_delay(),
        product_timeout: settings.crawler.request_timeout(),
        base_url: format!("https://{domain}"),
        default_seller: shop_display_name(domain).to_string(),
    })
}
