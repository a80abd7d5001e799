//! Server configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SET_URL: &str = "https://quizlet.com/vn/{set_id}";
const DEFAULT_OUTPUT_PATH: &str = "questions.docx";
const DEFAULT_SETTLE_MS: u64 = 500;
const SET_ID_PLACEHOLDER: &str = "{set_id}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("QUIZLET_SET_URL must contain {{set_id}}, got {0:?}")]
    MissingPlaceholder(String),
}

/// Runtime configuration for the server and the page fetcher.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// URL template with a `{set_id}` placeholder.
    pub set_url_template: String,
    /// Document path, overwritten on every successful request.
    pub output_path: PathBuf,
    pub chrome_executable: Option<PathBuf>,
    /// Extra wait after page load so late scripts can inject their state.
    pub page_settle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            set_url_template: DEFAULT_SET_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chrome_executable: None,
            page_settle: Duration::from_millis(DEFAULT_SETTLE_MS),
        }
    }
}

impl Config {
    /// Create a configuration from environment variables.
    ///
    /// Optional env vars:
    /// - HOST: Bind address (default "0.0.0.0")
    /// - PORT: Bind port (default 3000)
    /// - QUIZLET_SET_URL: Set page URL template containing `{set_id}`
    /// - OUTPUT_PATH: Document output path (default "questions.docx")
    /// - CHROME_PATH: Chromium executable; auto-detected when unset
    /// - PAGE_SETTLE_MS: Delay after page load before reading the page state
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => parse_number("PORT", value)?,
            None => defaults.port,
        };

        let page_settle = match lookup("PAGE_SETTLE_MS") {
            Some(value) => Duration::from_millis(parse_number("PAGE_SETTLE_MS", value)?),
            None => defaults.page_settle,
        };

        let set_url_template = lookup("QUIZLET_SET_URL").unwrap_or(defaults.set_url_template);
        if !set_url_template.contains(SET_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(set_url_template));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            set_url_template,
            output_path: lookup("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            chrome_executable: lookup("CHROME_PATH").map(PathBuf::from),
            page_settle,
        })
    }

    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Set page URL for the given set id.
    pub fn set_url(&self, set_id: &str) -> String {
        self.set_url_template.replace(SET_ID_PLACEHOLDER, set_id)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
