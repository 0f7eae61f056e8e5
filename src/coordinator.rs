//! Scrape coordinator - end-to-end orchestration
//!
//! Wires one run together: fetch → parse → extract → persist. Every failure
//! is logged and turned into an empty result; nothing is returned as an
//! error once the coordinator exists.

use crate::config::Config;
use crate::extract::{extract_quotes, QuoteRecord, QUOTE_FIELDS};
use crate::fetch::{Fetcher, Sleeper, TokioSleeper};
use crate::html::{extract_links, parse};
use crate::output::save_to_table;
use crate::ScrapeError;
use std::path::Path;
use url::Url;

/// Owns the configuration and the fetcher (and through it the HTTP client)
pub struct Coordinator<S = TokioSleeper> {
    config: Config,
    fetcher: Fetcher<S>,
}

impl Coordinator<TokioSleeper> {
    /// Creates a coordinator with a fetcher built from `config`
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<S: Sleeper> Coordinator<S> {
    /// Creates a coordinator around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: Fetcher<S>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one scrape and returns the extracted quotes
    ///
    /// `url` overrides the configured target. The quotes are written to the
    /// configured CSV path; when the page cannot be fetched nothing is
    /// written and the result is empty.
    pub async fn run(&mut self, url: Option<&str>) -> Vec<QuoteRecord> {
        let target = url.unwrap_or(&self.config.target.url).to_string();
        tracing::info!("Starting scrape: {}", target);

        let Some((_, body)) = self.fetch_page(&target).await else {
            return Vec::new();
        };

        let Some(document) = parse(Some(body.as_str())) else {
            tracing::warn!("Empty response body from {}", target);
            return Vec::new();
        };

        let records = match extract_quotes(&document, &self.config.selectors) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Extraction failed for {}: {}", target, e);
                return Vec::new();
            }
        };
        tracing::info!("Extracted {} quotes", records.len());

        save_to_table(
            &records,
            Path::new(&self.config.output.csv_path),
            &QUOTE_FIELDS,
        );

        records
    }

    /// Fetches a page and returns its links resolved against the page URL
    pub async fn collect_links(&mut self, url: Option<&str>) -> Vec<String> {
        let target = url.unwrap_or(&self.config.target.url).to_string();
        tracing::info!("Collecting links: {}", target);

        let Some((base, body)) = self.fetch_page(&target).await else {
            return Vec::new();
        };

        let links = parse(Some(body.as_str()))
            .map(|document| extract_links(&document, Some(&base)))
            .unwrap_or_default();
        tracing::info!("Found {} links", links.len());
        links
    }

    /// Validates `target` and fetches it with the configured attempt budget
    async fn fetch_page(&mut self, target: &str) -> Option<(Url, String)> {
        let base = match Url::parse(target) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid URL '{}': {}", target, e);
                return None;
            }
        };

        let body = self
            .fetcher
            .fetch(target, self.config.fetcher.max_attempts)
            .await?;
        Some((base, body))
    }
}
