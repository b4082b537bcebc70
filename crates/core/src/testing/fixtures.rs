//! Canned responses and torrent payloads for tests.

use crate::extractor::FORCE_DOWNLOAD;
use crate::fetcher::RawDownload;

/// 20 bytes of deliberately non-UTF-8 hash data for the `pieces` field.
const PIECES: [u8; 20] = [
    0xff, 0xfe, 0x00, 0x01, 0xde, 0xad, 0xbe, 0xef, 0x80, 0x81, 0x90, 0x91, 0xa0, 0xa1, 0xb0,
    0xb1, 0xc0, 0xc1, 0xd0, 0xd1,
];

/// A force-download response with the standard header set.
pub fn force_download(filename: &str, content_length: Option<u64>, body: Vec<u8>) -> RawDownload {
    RawDownload {
        status: 200,
        content_type: Some(FORCE_DOWNLOAD.to_string()),
        content_disposition: Some(format!("attachment; filename=\"{}\"", filename)),
        content_length: content_length.map(|n| n.to_string()),
        body,
    }
}

/// An HTML page, as the endpoint serves for ids with nothing behind them.
pub fn html_page() -> RawDownload {
    RawDownload {
        status: 200,
        content_type: Some("text/html".to_string()),
        content_disposition: None,
        content_length: None,
        body: b"<html><body>File not found</body></html>".to_vec(),
    }
}

/// Minimal single-file torrent: the size sits in the info dictionary's
/// top-level `length` field.
pub fn single_file_torrent(name: &str, length: u64) -> Vec<u8> {
    let mut info = Vec::new();
    info.push(b'd');
    info.extend_from_slice(format!("6:lengthi{}e", length).as_bytes());
    info.extend_from_slice(format!("4:name{}", bencode_str(name)).as_bytes());
    info.extend_from_slice(b"12:piece lengthi16384e6:pieces20:");
    info.extend_from_slice(&PIECES);
    info.push(b'e');
    wrap_info(&info)
}

/// Multi-file torrent: one `length` per file entry under `files`.
pub fn multi_file_torrent(name: &str, lengths: &[u64]) -> Vec<u8> {
    let mut info = Vec::new();
    info.extend_from_slice(b"d5:filesl");
    for (i, length) in lengths.iter().enumerate() {
        let file_name = format!("part{}.bin", i);
        info.extend_from_slice(
            format!("d6:lengthi{}e4:pathl{}ee", length, bencode_str(&file_name)).as_bytes(),
        );
    }
    info.push(b'e');
    info.extend_from_slice(format!("4:name{}", bencode_str(name)).as_bytes());
    info.extend_from_slice(b"12:piece lengthi16384e6:pieces20:");
    info.extend_from_slice(&PIECES);
    info.push(b'e');
    wrap_info(&info)
}

/// Bencoded string: `<len>:<bytes>`.
fn bencode_str(s: &str) -> String {
    format!("{}:{}", s.len(), s)
}

/// Wrap an info dictionary in the outer metainfo dictionary.
fn wrap_info(info: &[u8]) -> Vec<u8> {
    let mut out = b"d8:announce18:udp://tracker:69694:info".to_vec();
    out.extend_from_slice(info);
    out.push(b'e');
    out
}
