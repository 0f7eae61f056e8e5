//! Fetch module for retrieving page content over HTTP
//!
//! This module contains:
//! - Building the persistent HTTP client with the configured identity
//! - Randomized pre-request pacing with an injectable clock
//! - The bounded retry loop and its attempt states

mod client;
mod fetcher;
mod pacing;
mod state;

pub use client::build_http_client;
pub use fetcher::{FetchOutcome, Fetcher};
pub use pacing::{DelayPolicy, Sleeper, TokioSleeper};
pub use state::AttemptState;
