//! Types for the range driver.

use thiserror::Error;

use crate::store::StoreError;

/// Outcome of one full scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Ids covered by the pass.
    pub ids_scanned: u64,
    /// Rows written across all chunks (inserts and updates).
    pub records_written: u64,
    /// Ids that produced no record.
    pub misses: u64,
    /// Chunks fetched and persisted.
    pub chunks_completed: u64,
}

/// Errors that abort a scan run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A chunk write failed. Fatal: writes are never retried and there is
    /// no checkpoint to resume from.
    #[error("Batch write failed: {0}")]
    Store(#[from] StoreError),
}
