//! Configuration module for Quote-Scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, `Config::default()` reproduces the
//! built-in behavior.
//!
//! # Example
//!
//! ```no_run
//! use quote_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Fetcher will try {} times", config.fetcher.max_attempts);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, OutputConfig, QuoteSelectors, TargetConfig, UserAgentConfig,
    DEFAULT_TARGET_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
