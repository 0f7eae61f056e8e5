use crate::config::{FetcherConfig, UserAgentConfig};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by every request of one scraper
///
/// The client keeps its connection pool and cookie jar for its whole
/// lifetime. The timeout configured here applies to each request.
///
/// # Example
///
/// ```no_run
/// use quote_scraper::config::{FetcherConfig, UserAgentConfig};
/// use quote_scraper::fetch::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetcher: &FetcherConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.value.as_str())
        .timeout(Duration::from_secs(fetcher.timeout_secs))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .build()
}
