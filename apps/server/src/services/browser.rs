//! Headless browser access to a set page's embedded `__NEXT_DATA__` script.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use thiserror::Error;

use crate::config::Config;

/// Reads the script's text, or `''` when the element is absent.
const NEXT_DATA_EXPRESSION: &str =
    "document.querySelector('script[id=__NEXT_DATA__]')?.textContent ?? ''";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to launch browser: {0}")]
    Launch(String),

    #[error("failed to load {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("browser protocol error: {0}")]
    Protocol(String),
}

impl From<CdpError> for FetchError {
    fn from(err: CdpError) -> Self {
        FetchError::Protocol(err.to_string())
    }
}

/// Source of the raw `__NEXT_DATA__` text of a rendered page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns `Ok(None)` when the page has no (or an empty) `__NEXT_DATA__` script.
    async fn fetch_next_data(&self, url: &str) -> Result<Option<String>, FetchError>;
}

/// Launches a fresh headless Chromium for every fetch.
pub struct ChromiumFetcher {
    chrome_executable: Option<PathBuf>,
    settle: Duration,
}

impl ChromiumFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            chrome_executable: config.chrome_executable.clone(),
            settle: config.page_settle,
        }
    }

    fn browser_config(&self, profile_dir: &Path) -> Result<BrowserConfig, FetchError> {
        // A private profile per launch keeps concurrent browsers from sharing a lock file.
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .user_data_dir(profile_dir);
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(FetchError::Launch)
    }

    async fn read_next_data(&self, browser: &Browser, url: &str) -> Result<Option<String>, FetchError> {
        let page = browser.new_page("about:blank").await?;
        page.enable_stealth_mode().await?;

        page.goto(url).await.map_err(|e| FetchError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        let raw: String = page
            .evaluate(NEXT_DATA_EXPRESSION)
            .await?
            .into_value()
            .map_err(|e| FetchError::Protocol(e.to_string()))?;

        Ok(Some(raw).filter(|raw| !raw.trim().is_empty()))
    }
}

#[async_trait]
impl PageFetcher for ChromiumFetcher {
    async fn fetch_next_data(&self, url: &str) -> Result<Option<String>, FetchError> {
        let profile = tempfile::Builder::new()
            .prefix("quizlet-docx-")
            .tempdir()
            .map_err(|e| FetchError::Launch(e.to_string()))?;

        let config = self.browser_config(profile.path())?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| FetchError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("Browser event error: {}", e);
                }
            }
        });

        let result = self.read_next_data(&browser, url).await;

        // The browser is released on every path, including errors above.
        if let Err(e) = browser.close().await {
            tracing::warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = browser.wait().await {
            tracing::warn!("Failed to reap browser process: {}", e);
        }
        handler_task.abort();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_config_builds() {
        let fetcher = ChromiumFetcher {
            chrome_executable: Some(PathBuf::from("/usr/bin/chromium")),
            settle: Duration::ZERO,
        };
        let profile = tempfile::tempdir().unwrap();
        assert!(fetcher.browser_config(profile.path()).is_ok());
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Launch("no executable".to_string()).to_string(),
            "unable to launch browser: no executable"
        );
        assert_eq!(
            FetchError::Protocol("closed".to_string()).to_string(),
            "browser protocol error: closed"
        );
    }

    /// Loads a real page in Chromium.
    #[tokio::test]
    #[ignore = "requires chromium and network access"]
    async fn test_fetch_page_without_next_data() {
        let fetcher = ChromiumFetcher::new(&Config::default());
        let result = fetcher.fetch_next_data("https://example.com").await.unwrap();
        assert_eq!(result, None);
    }
}
