//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to a stub page fetcher
//! - StubFetcher serving canned `__NEXT_DATA__` payloads per URL
//! - Helpers for waiting on the background document write and reading it back

pub mod fixtures;

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use tempfile::TempDir;

use quizlet_docx_server::config::Config;
use quizlet_docx_server::services::browser::{FetchError, PageFetcher};
use quizlet_docx_server::AppState;

pub const SET_URL_TEMPLATE: &str = "https://quizlet.test/{set_id}";

/// Canned response for one set URL.
#[derive(Clone)]
pub enum StubPage {
    NextData(String),
    NoScript,
    LaunchFailure,
    NavigationFailure,
    /// The fetch task panics with this message.
    Panic(&'static str),
}

/// Page fetcher returning canned pages, tracking each simulated browser session.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, StubPage>,
    delay: Duration,
    pub launched: AtomicUsize,
    pub closed: AtomicUsize,
}

impl StubFetcher {
    pub fn with_page(mut self, set_id: &str, page: StubPage) -> Self {
        self.pages.insert(SET_URL_TEMPLATE.replace("{set_id}", set_id), page);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_next_data(&self, url: &str) -> Result<Option<String>, FetchError> {
        let page = self.pages.get(url).cloned().unwrap_or(StubPage::NoScript);
        if let StubPage::LaunchFailure = page {
            return Err(FetchError::Launch("chromium not found".to_string()));
        }

        self.launched.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let result = match page {
            StubPage::NextData(raw) => Ok(Some(raw)),
            StubPage::NoScript => Ok(None),
            StubPage::NavigationFailure => Err(FetchError::Navigation {
                url: url.to_string(),
                message: "net::ERR_CONNECTION_RESET".to_string(),
            }),
            StubPage::Panic(message) => panic!("{}", message),
            StubPage::LaunchFailure => unreachable!(),
        };
        self.closed.fetch_add(1, Ordering::SeqCst);
        result
    }
}

/// Test context containing the stub fetcher and an isolated output directory.
pub struct TestContext {
    pub fetcher: Arc<StubFetcher>,
    pub output_path: PathBuf,
    _dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a new test context around the given fetcher.
    pub fn new(fetcher: StubFetcher) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output_path = dir.path().join("questions.docx");

        let config = Config {
            set_url_template: SET_URL_TEMPLATE.to_string(),
            output_path: output_path.clone(),
            page_settle: Duration::ZERO,
            ..Config::default()
        };

        let fetcher = Arc::new(fetcher);
        let state = AppState {
            config: Arc::new(config),
            fetcher: fetcher.clone(),
        };

        Self {
            fetcher,
            output_path,
            _dir: dir,
            app: quizlet_docx_server::app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Wait until the background write has produced a complete document.
    pub async fn wait_for_document(&self) -> Vec<u8> {
        wait_for_file(&self.output_path).await
    }
}

/// Poll for a readable `.docx` package at `path`, panicking after five seconds.
pub async fn wait_for_file(path: &Path) -> Vec<u8> {
    for _ in 0..100 {
        if let Ok(bytes) = tokio::fs::read(path).await {
            if zip::ZipArchive::new(Cursor::new(bytes.as_slice())).is_ok() {
                return bytes;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("document was not written to {}", path.display());
}

/// Read the main body part (`word/document.xml`) out of a `.docx` package.
pub fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("not a zip package");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("missing word/document.xml")
        .read_to_string(&mut xml)
        .expect("document.xml is not UTF-8");
    xml
}
