//! Quote-Scraper: a small single-page quote harvester
//!
//! This crate fetches one page, parses its markup, extracts quote records
//! through CSS selectors and writes them to a CSV file.

pub mod config;
pub mod coordinator;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod output;

use thiserror::Error;

/// Main error type for Quote-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Returns true for 4xx responses that will not change on retry
    ///
    /// 408 (Request Timeout) and 429 (Too Many Requests) are excluded since
    /// both describe a transient condition.
    pub fn is_permanent_client_error(&self) -> bool {
        match self {
            Self::Status { status, .. } => {
                (400..500).contains(status) && *status != 408 && *status != 429
            }
            _ => false,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Quote-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::Coordinator;
pub use extract::{extract_quotes, QuoteRecord, QUOTE_FIELDS};
pub use fetch::{AttemptState, Fetcher};
pub use html::{extract_links, parse, Document};
pub use output::{read_table, save_to_table, Record, TableRow};
