//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and drive the
//! fetcher and the coordinator end-to-end without real delays. The CLI
//! tests run the built binary.

mod fetch_tests;
mod scrape_tests;
