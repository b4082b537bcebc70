//! Catalog fetcher - one GET per identifier, with the layered retry policy.
//!
//! Connect-level failures are not retried; read timeouts are retried with a
//! fixed backoff up to a bounded attempt count. Everything else, including
//! non-2xx statuses, is handed to the extractor untouched.

mod http;
mod types;

pub use http::HttpFetcher;
pub use types::*;

use async_trait::async_trait;

/// Trait for fetching one catalog resource by id.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the downloadable resource for `id`.
    ///
    /// Absence (connect failure or exhausted read-timeout retries) is an
    /// expected outcome, not an error.
    async fn fetch(&self, id: u32) -> FetchOutcome;
}

/// Build the canonical download URL for an identifier.
pub fn download_url(endpoint: &str, id: u32) -> String {
    format!("{}?id={}", endpoint, id)
}
