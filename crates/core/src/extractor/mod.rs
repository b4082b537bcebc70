//! Metadata extraction - turns a raw catalog response into a `FileRecord`.
//!
//! A chain of gates, each of which can short-circuit to absence: fetch
//! absence, content-type mismatch, unparseable disposition header, empty
//! extension. Absence is an expected, frequent outcome and is logged at
//! informational level at most.

mod headers;
mod torrent;

pub use headers::{file_extension, parse_disposition_filename, strip_site_tag};
pub use torrent::{torrent_total_size, TorrentParseError};

use tracing::{debug, info, warn};

use crate::fetcher::{download_url, FetchOutcome};
use crate::metrics;
use crate::store::FileRecord;

/// Content-type value that marks a real downloadable file.
pub const FORCE_DOWNLOAD: &str = "application/force-download";

/// Extension identifying bencoded torrent payloads.
const TORRENT_EXT: &str = "torrent";

/// Derive a `FileRecord` from one fetch outcome.
///
/// Returns `None` for every expected "no record" case. Pure given its
/// inputs: no network, no shared mutable state. A torrent body that fails
/// to decode also yields `None` so one corrupt payload cannot abort a scan
/// spanning thousands of ids.
pub fn extract(id: u32, outcome: &FetchOutcome, endpoint: &str) -> Option<FileRecord> {
    let raw = match outcome {
        FetchOutcome::Fetched(raw) => raw,
        FetchOutcome::Missing(reason) => {
            debug!(id, reason = %reason, "no response");
            return skip("missing");
        }
    };

    if raw.content_type.as_deref() != Some(FORCE_DOWNLOAD) {
        debug!(id, content_type = ?raw.content_type, "not a downloadable file");
        return skip("not_a_file");
    }

    let name = match raw
        .content_disposition
        .as_deref()
        .and_then(parse_disposition_filename)
    {
        Some(name) => strip_site_tag(&name),
        None => {
            info!(id, "no filename in content-disposition");
            return skip("no_filename");
        }
    };

    let ext = match file_extension(&name) {
        Some(ext) => ext.to_string(),
        None => {
            info!(id, name = %name, "filename has no extension");
            return skip("no_extension");
        }
    };

    let size = if ext == TORRENT_EXT {
        match torrent_total_size(&raw.body) {
            Ok(total) => Some(total),
            Err(e) => {
                warn!(id, error = %e, "undecodable torrent payload");
                return skip("bad_torrent");
            }
        }
    } else {
        raw.content_length
            .as_deref()
            .and_then(|v| v.parse::<u64>().ok())
    };

    metrics::EXTRACTIONS.with_label_values(&["record"]).inc();
    Some(FileRecord {
        id,
        name,
        ext,
        url: download_url(endpoint, id),
        size,
    })
}

fn skip(outcome: &'static str) -> Option<FileRecord> {
    metrics::EXTRACTIONS.with_label_values(&[outcome]).inc();
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{MissReason, RawDownload};
    use crate::testing::fixtures;

    const ENDPOINT: &str = "https://freetp.org/engine/download.php";

    #[test]
    fn test_extract_zip_record() {
        let raw = fixtures::force_download("Foo [FreeTP.Org].zip", Some(1_048_576), vec![]);
        let record = extract(42, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.name, "Foo.zip");
        assert_eq!(record.ext, "zip");
        assert_eq!(record.url, "https://freetp.org/engine/download.php?id=42");
        assert_eq!(record.size, Some(1_048_576));
    }

    #[test]
    fn test_extract_missing_outcome_is_absent() {
        assert!(extract(1, &FetchOutcome::Missing(MissReason::ConnectFailed), ENDPOINT).is_none());
        assert!(
            extract(1, &FetchOutcome::Missing(MissReason::RetriesExhausted), ENDPOINT).is_none()
        );
    }

    #[test]
    fn test_extract_rejects_non_sentinel_content_type() {
        // Headers that would otherwise produce a record must never be inspected.
        let mut raw = fixtures::force_download("Foo.zip", Some(100), vec![]);
        raw.content_type = Some("text/html".to_string());
        assert!(extract(100, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());

        let raw = fixtures::html_page();
        assert!(extract(100, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_content_type_must_match_exactly() {
        let mut raw = fixtures::force_download("Foo.zip", Some(100), vec![]);
        raw.content_type = Some("application/force-download; charset=utf-8".to_string());
        assert!(extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_missing_disposition_is_absent() {
        let mut raw = fixtures::force_download("Foo.zip", Some(100), vec![]);
        raw.content_disposition = None;
        assert!(extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_unquoted_disposition_is_absent() {
        let mut raw = fixtures::force_download("Foo.zip", Some(100), vec![]);
        raw.content_disposition = Some("attachment; filename=Foo.zip".to_string());
        assert!(extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_no_extension_is_absent() {
        let raw = fixtures::force_download("README", Some(100), vec![]);
        assert!(extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());

        let raw = fixtures::force_download("trailing.", Some(100), vec![]);
        assert!(extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_torrent_sums_file_lengths() {
        let body = fixtures::multi_file_torrent("Game", &[100, 200, 300]);
        let raw = fixtures::force_download("Game [FreeTP.Org].torrent", None, body);
        let record = extract(7, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();

        assert_eq!(record.name, "Game.torrent");
        assert_eq!(record.ext, "torrent");
        assert_eq!(record.size, Some(600));
    }

    #[test]
    fn test_extract_single_file_torrent_uses_top_level_length() {
        let body = fixtures::single_file_torrent("game.iso", 4_700_000_000);
        let raw = fixtures::force_download("Game.torrent", None, body);
        let record = extract(7, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();

        assert_eq!(record.size, Some(4_700_000_000));
    }

    #[test]
    fn test_extract_torrent_ignores_content_length_header() {
        let body = fixtures::single_file_torrent("game.iso", 500);
        // content-length reflects the .torrent file itself, not the payload
        let raw = fixtures::force_download("Game.torrent", Some(123), body);
        let record = extract(7, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();

        assert_eq!(record.size, Some(500));
    }

    #[test]
    fn test_extract_corrupt_torrent_is_absent() {
        let raw = fixtures::force_download("Game.torrent", None, b"not bencode".to_vec());
        assert!(extract(7, &FetchOutcome::Fetched(raw), ENDPOINT).is_none());
    }

    #[test]
    fn test_extract_unparseable_content_length_yields_unknown_size() {
        let mut raw = fixtures::force_download("Foo.zip", None, vec![]);
        raw.content_length = Some("not a number".to_string());
        let record = extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();
        assert_eq!(record.size, None);

        let raw = RawDownload {
            status: 200,
            content_type: Some(FORCE_DOWNLOAD.to_string()),
            content_disposition: Some("attachment; filename=\"Foo.zip\"".to_string()),
            content_length: None,
            body: vec![],
        };
        let record = extract(1, &FetchOutcome::Fetched(raw), ENDPOINT).unwrap();
        assert_eq!(record.size, None);
    }
}
