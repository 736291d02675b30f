// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use sosanhgia::application::scrape_products::scrape_products;
use sosanhgia::config::settings::Settings;
use sosanhgia::sink::memory::MemorySink;
use sosanhgia::sink::ProductSink;
use sosanhgia::utils::telemetry;

/// Marketplace product price crawler
#[derive(Debug, Parser)]
#[command(name = "sosanhgia", version, about = "Scrape marketplace search results into normalized product offers")]
struct Cli {
    /// Search query, e.g. "iPhone 13 Pro"
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of listing pages to crawl
    #[arg(short = 'p', long, value_name = "N")]
    max_pages: Option<u32>,

    /// Marketplace shop domain
    #[arg(short, long, value_name = "DOMAIN")]
    shop: Option<String>,

    /// Run the browser with a visible window
    #[arg(long, default_value_t = false)]
    headed: bool,

    /// Write the raw scraped records to a JSON file
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

/// Application entry point: crawl, save, report.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();
    let mut settings = Settings::new()?;
    if let Some(max_pages) = cli.max_pages {
        settings.crawler.max_pages = max_pages.max(1);
    }
    if let Some(shop) = cli.shop {
        settings.marketplace.shop_domain = shop;
    }
    if cli.headed {
        settings.crawler.headless = false;
    }

    info!(
        query = %cli.query,
        shop = %settings.marketplace.shop_domain,
        max_pages = settings.crawler.max_pages,
        headless = settings.crawler.headless,
        "starting scrape"
    );

    let records = scrape_products(&cli.query, &settings).await?;
    info!(records = records.len(), "scrape complete");

    if records.is_empty() {
        info!("no products found");
        return Ok(());
    }

    if let Some(path) = &cli.out {
        std::fs::write(path, serde_json::to_string_pretty(&records)?)?;
        info!(path = %path.display(), "wrote raw records");
    }

    let sink = MemorySink::new();
    let report = sink.save(&records, &settings.marketplace.shop_domain).await;
    let stats = sink.stats();

    info!(
        scraped = records.len(),
        saved_products = report.saved_products,
        saved_offers = report.saved_offers,
        distinct_products = stats.products,
        "save complete"
    );
    for error in &report.errors {
        warn!("{error}");
    }

    Ok(())
}
