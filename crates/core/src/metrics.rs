//! Prometheus metrics for the ingestion pipeline.
//!
//! Fetch outcomes carry a `result` label so "nothing there" stays
//! distinguishable from "retries exhausted" in telemetry, even though both
//! are absence to the pipeline.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Fetches by result ("fetched", "connect_failed", "retries_exhausted").
pub static FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("freetp_fetches_total", "Total fetches by outcome"),
        &["result"],
    )
    .unwrap()
});

/// Extraction outcomes ("record", "missing", "not_a_file", "no_filename",
/// "no_extension", "bad_torrent").
pub static EXTRACTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("freetp_extractions_total", "Total extraction outcomes"),
        &["outcome"],
    )
    .unwrap()
});

/// Rows written by batch upserts.
pub static RECORDS_WRITTEN: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "freetp_records_written_total",
        "Total rows written by batch upserts",
    )
    .unwrap()
});

/// Chunks fetched and persisted.
pub static CHUNKS_COMPLETED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("freetp_chunks_completed_total", "Total chunks completed").unwrap()
});

/// Get all pipeline metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FETCHES.clone()),
        Box::new(EXTRACTIONS.clone()),
        Box::new(RECORDS_WRITTEN.clone()),
        Box::new(CHUNKS_COMPLETED.clone()),
    ]
}
