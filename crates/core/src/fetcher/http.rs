//! HTTP fetcher implementation backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::FetcherConfig;
use crate::metrics;

use super::{download_url, FetchOutcome, Fetcher, MissReason, RawDownload};

/// Fetcher that issues real GETs against the catalog endpoint.
pub struct HttpFetcher {
    client: Client,
    config: FetcherConfig,
}

impl HttpFetcher {
    /// Create a new HttpFetcher with the given configuration.
    pub fn new(config: FetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    async fn attempt(&self, url: &str) -> Result<RawDownload, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let content_type = header_value(&response, CONTENT_TYPE);
        let content_disposition = header_value(&response, CONTENT_DISPOSITION);
        let content_length = header_value(&response, CONTENT_LENGTH);
        let body = response.bytes().await?.to_vec();

        Ok(RawDownload {
            status,
            content_type,
            content_disposition,
            content_length,
            body,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, id: u32) -> FetchOutcome {
        let url = download_url(&self.config.endpoint, id);

        for attempt in 1..=self.config.attempts {
            match self.attempt(&url).await {
                Ok(raw) => {
                    metrics::FETCHES.with_label_values(&["fetched"]).inc();
                    return FetchOutcome::Fetched(raw);
                }
                Err(e) if is_read_timeout(&e) => {
                    warn!(
                        id,
                        attempt,
                        backoff_secs = self.config.backoff_secs,
                        "read timeout, backing off"
                    );
                    tokio::time::sleep(Duration::from_secs(self.config.backoff_secs)).await;
                }
                Err(e) => {
                    debug!(id, error = %e, "connect failed");
                    metrics::FETCHES
                        .with_label_values(&[MissReason::ConnectFailed.as_str()])
                        .inc();
                    return FetchOutcome::Missing(MissReason::ConnectFailed);
                }
            }
        }

        warn!(id, attempts = self.config.attempts, "read timeouts exhausted");
        metrics::FETCHES
            .with_label_values(&[MissReason::RetriesExhausted.as_str()])
            .inc();
        FetchOutcome::Missing(MissReason::RetriesExhausted)
    }
}

fn header_value(response: &reqwest::Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// A timeout after the connection was established. Connect timeouts also
/// report `is_timeout`, so they must be excluded here.
fn is_read_timeout(e: &reqwest::Error) -> bool {
    e.is_timeout() && !e.is_connect()
}
