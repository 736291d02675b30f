// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Crawl error taxonomy
#[derive(Error, Debug)]
pub enum CrawlError {
    /// Crawl invoked before the session was initialized
    #[error("browser session not initialized, call init() first")]
    NotInitialized,
    /// The browser engine failed to start; fatal for the whole crawl
    #[error("browser session failed to launch: {0}")]
    SessionLaunch(String),
    /// A page navigation failed
    #[error("navigation failed: {0}")]
    Navigation(String),
    /// A bounded page operation ran out of time
    #[error("page operation timed out")]
    Timeout,
    /// A browser protocol call failed
    #[error("browser protocol error: {0}")]
    Protocol(String),
    /// The configuration could not be turned into a crawl plan
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Browser session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run without a visible window
    pub headless: bool,
    /// Per-navigation timeout
    pub request_timeout: Duration,
    /// User agent set on every opened page
    pub user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            request_timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// One exclusively-owned browser session
///
/// Pages are opened with the configured user agent already set and the
/// initial navigation completed.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Open a fresh page and navigate it to `url`.
    async fn open_page(&self, url: &str) -> Result<Box<dyn PageHandle>, CrawlError>;

    /// Release the session. Safe to call more than once.
    async fn close(&mut self) -> Result<(), CrawlError>;
}

/// One live page within a session
#[async_trait]
pub trait PageHandle: Send + Sync {
    /// Snapshot of the current DOM as an HTML string.
    async fn html(&self) -> Result<String, CrawlError>;

    /// Click the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<(), CrawlError>;

    /// Wait for an in-flight navigation to settle.
    async fn wait_for_navigation(&self) -> Result<(), CrawlError>;

    /// Close the page. Errors are not actionable for callers.
    async fn close(self: Box<Self>) -> Result<(), CrawlError>;
}

/// Chrome DevTools Protocol session backed by chromiumoxide
pub struct CdpSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    config: SessionConfig,
}

impl CdpSession {
    /// Launch a sandboxed browser process.
    ///
    /// # Arguments
    ///
    /// * `config` - session configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CdpSession)` - running session owning the browser process
    /// * `Err(CrawlError::SessionLaunch)` - the engine failed to start
    pub async fn launch(config: SessionConfig) -> Result<Self, CrawlError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(config.request_timeout);

        builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(CrawlError::SessionLaunch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| CrawlError::SessionLaunch(e.to_string()))?;

        // Drain browser events for the lifetime of the session.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            config,
        })
    }
}

#[async_trait]
impl BrowserSession for CdpSession {
    async fn open_page(&self, url: &str) -> Result<Box<dyn PageHandle>, CrawlError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| CrawlError::Protocol(e.to_string()))?;

        page.set_user_agent(self.config.user_agent.as_str())
            .await
            .map_err(|e| CrawlError::Protocol(e.to_string()))?;

        page.goto(url)
            .await
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;

        // goto resolves on the load event; a missing follow-up navigation
        // signal is not an error.
        page.wait_for_navigation().await.ok();

        Ok(Box::new(CdpPage { page }))
    }

    async fn close(&mut self) -> Result<(), CrawlError> {
        self.browser.close().await.ok();
        self.handler_task.abort();
        Ok(())
    }
}

/// One live CDP page
struct CdpPage {
    page: Page,
}

#[async_trait]
impl PageHandle for CdpPage {
    async fn html(&self) -> Result<String, CrawlError> {
        self.page
            .content()
            .await
            .map_err(|e| CrawlError::Protocol(e.to_string()))
    }

    async fn click(&self, selector: &str) -> Result<(), CrawlError> {
        self.page
            .find_element(selector)
            .await
            .map_err(|e| CrawlError::Protocol(format!("element not found: {e}")))?
            .click()
            .await
            .map_err(|e| CrawlError::Protocol(format!("click failed: {e}")))?;
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<(), CrawlError> {
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), CrawlError> {
        self.page.close().await.ok();
        Ok(())
    }
}
