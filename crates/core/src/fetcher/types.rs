//! Types for the catalog fetcher.

use std::fmt;

/// Result of one fetch for an identifier. Transient, never persisted.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The endpoint answered; the extractor decides whether it is a real file.
    Fetched(RawDownload),
    /// No response was obtained for this id.
    Missing(MissReason),
}

/// Raw response data the extractor consumes.
#[derive(Debug, Clone, Default)]
pub struct RawDownload {
    /// HTTP status code. The fetcher never interprets it.
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub content_length: Option<String>,
    /// Response body bytes (the torrent payload for torrent downloads).
    pub body: Vec<u8>,
}

/// Why no response was obtained.
///
/// Both variants map to absence downstream; keeping them apart lets logs and
/// metrics tell "nothing there" from "gave up on a flaky link".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The connection could not be established. Not retried.
    ConnectFailed,
    /// Requests kept timing out after the connection was established.
    RetriesExhausted,
}

impl MissReason {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissReason::ConnectFailed => "connect_failed",
            MissReason::RetriesExhausted => "retries_exhausted",
        }
    }
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_reason_labels() {
        assert_eq!(MissReason::ConnectFailed.as_str(), "connect_failed");
        assert_eq!(MissReason::RetriesExhausted.to_string(), "retries_exhausted");
    }

    #[test]
    fn test_raw_download_default_has_no_headers() {
        let raw = RawDownload::default();
        assert!(raw.content_type.is_none());
        assert!(raw.content_disposition.is_none());
        assert!(raw.content_length.is_none());
        assert!(raw.body.is_empty());
    }
}
