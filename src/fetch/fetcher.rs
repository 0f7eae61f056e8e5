//! HTTP fetcher with bounded retry
//!
//! # Retry Logic
//!
//! | Condition | Action |
//! |-----------|--------|
//! | 2xx with readable body | Succeeded |
//! | Transport error / timeout | Retry until the attempt budget is spent |
//! | HTTP 5xx, 408, 429 | Retry until the attempt budget is spent |
//! | Other HTTP 4xx | Retry by default; immediate Abandoned when `retry-client-errors = false` |
//!
//! Every attempt, the first included, is preceded by a random delay.

use crate::config::{Config, FetcherConfig};
use crate::fetch::client::build_http_client;
use crate::fetch::pacing::{DelayPolicy, Sleeper, TokioSleeper};
use crate::fetch::state::AttemptState;
use crate::ScrapeError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;

/// Result of a complete fetch, retries included
#[derive(Debug)]
pub struct FetchOutcome {
    /// Terminal state the loop ended in
    pub state: AttemptState,

    /// Number of requests actually sent
    pub attempts: u32,

    /// Response body, present only when `state` is `Succeeded`
    pub body: Option<String>,
}

/// Fetches pages through one persistent client
///
/// The sleeper type parameter lets tests replace the wall-clock delay.
pub struct Fetcher<S = TokioSleeper> {
    client: Client,
    delay: DelayPolicy,
    retry_client_errors: bool,
    rng: StdRng,
    sleeper: S,
}

impl Fetcher<TokioSleeper> {
    /// Creates a fetcher with a fresh client, OS-seeded randomness and real sleeps
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent, &config.fetcher)?;
        Ok(Self::with_parts(
            client,
            &config.fetcher,
            StdRng::from_os_rng(),
            TokioSleeper,
        ))
    }
}

impl<S: Sleeper> Fetcher<S> {
    /// Assembles a fetcher from explicit parts
    pub fn with_parts(client: Client, config: &FetcherConfig, rng: StdRng, sleeper: S) -> Self {
        Self {
            client,
            delay: DelayPolicy::from_config(config),
            retry_client_errors: config.retry_client_errors,
            rng,
            sleeper,
        }
    }

    /// Replaces the delay policy
    pub fn with_delay(mut self, delay: DelayPolicy) -> Self {
        self.delay = delay;
        self
    }

    /// Fetches `url`, making at most `max_attempts` requests
    ///
    /// Returns the body of the first successful response, or `None` once the
    /// attempts are used up. Failures are logged, never returned.
    pub async fn fetch(&mut self, url: &str, max_attempts: u32) -> Option<String> {
        self.fetch_outcome(url, max_attempts).await.body
    }

    /// Same as [`fetch`](Self::fetch) but reports the final state and attempt count
    pub async fn fetch_outcome(&mut self, url: &str, max_attempts: u32) -> FetchOutcome {
        if max_attempts == 0 {
            tracing::warn!("No attempts allowed for {}, skipping request", url);
            return FetchOutcome {
                state: AttemptState::Exhausted,
                attempts: 0,
                body: None,
            };
        }

        let mut attempts = 0;
        loop {
            let pause = self.delay.next_delay(&mut self.rng);
            tracing::trace!("Waiting {:?} before requesting {}", pause, url);
            self.sleeper.sleep(pause).await;

            let result = self.attempt(url).await;
            attempts += 1;

            let error = match result {
                Ok(body) => {
                    tracing::debug!("Fetched {} ({} bytes, attempt {})", url, body.len(), attempts);
                    return FetchOutcome {
                        state: AttemptState::Succeeded,
                        attempts,
                        body: Some(body),
                    };
                }
                Err(e) => e,
            };

            tracing::warn!(
                "Request failed, attempt {} of {}: {}",
                attempts,
                max_attempts,
                error
            );

            if !self.retry_client_errors && error.is_permanent_client_error() {
                tracing::error!("Permanent client error, giving up on {}", url);
                return FetchOutcome {
                    state: AttemptState::Abandoned,
                    attempts,
                    body: None,
                };
            }

            let state = AttemptState::after_failure(attempts, max_attempts);
            if state.is_terminal() {
                tracing::error!("Reached maximum attempts, giving up on {}", url);
                return FetchOutcome {
                    state,
                    attempts,
                    body: None,
                };
            }
        }
    }

    /// Sends one GET and reads the body
    async fn attempt(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })
    }
}
