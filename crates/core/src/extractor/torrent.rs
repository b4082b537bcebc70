//! Torrent payload decoding - total declared size from bencoded metainfo.
//!
//! Uses librqbit-core to parse the bencoded dictionary. The `pieces` hash
//! blob is carried as raw bytes by the parser, so binary hash data never
//! goes through a text decode.

use librqbit_core::torrent_metainfo::{torrent_from_bytes, TorrentMetaV1Owned};
use thiserror::Error;

/// Errors that can occur when decoding a torrent payload.
#[derive(Debug, Error)]
pub enum TorrentParseError {
    #[error("Failed to parse torrent: {0}")]
    ParseError(String),

    #[error("Torrent declares no file lengths")]
    NoLengths,
}

/// Total declared size of a torrent payload, in bytes.
///
/// Single-file torrents carry the size in the info dictionary's top-level
/// `length` field; multi-file torrents sum the `length` of every file entry.
pub fn torrent_total_size(bytes: &[u8]) -> Result<u64, TorrentParseError> {
    let torrent: TorrentMetaV1Owned =
        torrent_from_bytes(bytes).map_err(|e| TorrentParseError::ParseError(e.to_string()))?;

    let info = &torrent.info;

    if let Some(ref files) = info.files {
        if files.is_empty() {
            return Err(TorrentParseError::NoLengths);
        }
        Ok(files.iter().map(|f| f.length).sum())
    } else if let Some(length) = info.length {
        Ok(length)
    } else {
        Err(TorrentParseError::NoLengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_single_file_total_size() {
        let bytes = fixtures::single_file_torrent("foo.bin", 1_048_576);
        assert_eq!(torrent_total_size(&bytes).unwrap(), 1_048_576);
    }

    #[test]
    fn test_multi_file_total_size_is_the_sum() {
        let bytes = fixtures::multi_file_torrent("dir", &[100, 200, 300]);
        assert_eq!(torrent_total_size(&bytes).unwrap(), 600);
    }

    #[test]
    fn test_multi_file_single_entry() {
        let bytes = fixtures::multi_file_torrent("dir", &[4096]);
        assert_eq!(torrent_total_size(&bytes).unwrap(), 4096);
    }

    #[test]
    fn test_invalid_payload() {
        assert!(torrent_total_size(b"not a valid torrent").is_err());
    }

    #[test]
    fn test_empty_payload() {
        assert!(torrent_total_size(b"").is_err());
    }

    #[test]
    fn test_html_error_page_is_rejected() {
        // What the endpoint actually serves when an id has no resource.
        assert!(torrent_total_size(b"<html><body>not found</body></html>").is_err());
    }
}
