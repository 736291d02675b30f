// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration settings
///
/// Contains the crawler tuning knobs and the target marketplace parameters
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Crawler configuration
    pub crawler: CrawlerSettings,
    /// Marketplace configuration
    pub marketplace: MarketplaceSettings,
}

/// Crawler configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// Run the browser without a visible window
    pub headless: bool,
    /// Maximum number of listing pages to crawl per invocation
    pub max_pages: u32,
    /// Per-navigation timeout (seconds)
    pub request_timeout_secs: u64,
    /// Delay after a navigation before reading the page (milliseconds)
    pub settle_delay_ms: u64,
    /// Politeness delay between product fetches (milliseconds)
    pub product_delay_ms: u64,
    /// Politeness delay between listing pages (milliseconds)
    pub page_delay_ms: u64,
    /// User agent sent with every page
    pub user_agent: String,
}

/// Marketplace configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceSettings {
    /// Shop domain the crawl targets, e.g. "tiki.vn"
    pub shop_domain: String,
}

impl CrawlerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn product_delay(&self) -> Duration {
        Duration::from_millis(self.product_delay_ms)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

impl Settings {
    /// Create a new settings instance
    ///
    /// Loads defaults first, then an optional config file, then
    /// environment variable overrides
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - successfully loaded configuration
    /// * `Err(ConfigError)` - configuration loading failed
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default crawler settings
            .set_default("crawler.headless", true)?
            .set_default("crawler.max_pages", 2)?
            .set_default("crawler.request_timeout_secs", 30)?
            .set_default("crawler.settle_delay_ms", 1000)?
            .set_default("crawler.product_delay_ms", 500)?
            .set_default("crawler.page_delay_ms", 1000)?
            .set_default(
                "crawler.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )?
            // Default marketplace settings
            .set_default("marketplace.shop_domain", "tiki.vn")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SOSANHGIA").separator("__"));

        builder.build()?.try_deserialize()
    }
}
