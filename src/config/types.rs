use serde::Deserialize;

/// Page scraped when no URL is given
pub const DEFAULT_TARGET_URL: &str = "https://quotes.toscrape.com/";

/// Browser-like identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Quote-Scraper
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub fetcher: FetcherConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub selectors: QuoteSelectors,
}

/// Page to scrape
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TARGET_URL.to_string(),
        }
    }
}

/// Retry and pacing behavior of the fetcher
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Total number of attempts before giving up
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Lower bound of the random pre-request delay (milliseconds)
    #[serde(rename = "min-delay-ms")]
    pub min_delay_ms: u64,

    /// Upper bound of the random pre-request delay (milliseconds)
    #[serde(rename = "max-delay-ms")]
    pub max_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Whether permanent 4xx responses consume retry attempts
    #[serde(rename = "retry-client-errors")]
    pub retry_client_errors: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_delay_ms: 1000,
            max_delay_ms: 3000,
            timeout_secs: 10,
            retry_client_errors: true,
        }
    }
}

/// User agent identification
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "quotes.csv".to_string(),
        }
    }
}

/// CSS selectors locating the quote fields
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuoteSelectors {
    /// One match per quote
    pub container: String,

    /// Quote text, searched inside the container
    pub text: String,

    /// Author name, searched inside the container
    pub author: String,

    /// Tags, searched inside the container
    pub tag: String,
}

impl Default for QuoteSelectors {
    fn default() -> Self {
        Self {
            container: ".quote".to_string(),
            text: ".text".to_string(),
            author: ".author".to_string(),
            tag: ".tag".to_string(),
        }
    }
}
