//! Mock fetcher for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::fetcher::{FetchOutcome, Fetcher, MissReason};

/// Mock implementation of the Fetcher trait.
///
/// Outcomes are scripted per id; unscripted ids come back as
/// `Missing(ConnectFailed)`, which is what the real endpoint looks like for
/// an id that has nothing behind it. Fetched ids are recorded for
/// assertions.
///
/// # Example
///
/// ```rust,ignore
/// use freetp_core::testing::{fixtures, MockFetcher};
/// use freetp_core::fetcher::{FetchOutcome, Fetcher};
///
/// let fetcher = MockFetcher::new();
/// fetcher
///     .set_outcome(
///         42,
///         FetchOutcome::Fetched(fixtures::force_download("Foo.zip", Some(100), vec![])),
///     )
///     .await;
///
/// let outcome = fetcher.fetch(42).await;
/// assert!(matches!(outcome, FetchOutcome::Fetched(_)));
/// assert_eq!(fetcher.fetched_ids().await, vec![42]);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    outcomes: Arc<RwLock<HashMap<u32, FetchOutcome>>>,
    fetched: Arc<RwLock<Vec<u32>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome returned for `id`.
    pub async fn set_outcome(&self, id: u32, outcome: FetchOutcome) {
        self.outcomes.write().await.insert(id, outcome);
    }

    /// Ids fetched so far.
    pub async fn fetched_ids(&self) -> Vec<u32> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, id: u32) -> FetchOutcome {
        self.fetched.write().await.push(id);
        self.outcomes
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or(FetchOutcome::Missing(MissReason::ConnectFailed))
    }
}
