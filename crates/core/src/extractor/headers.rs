//! Header parsing helpers - pure string functions, no network access.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Quoted-segment pattern for content-disposition filenames.
fn filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""\s*(.+?)\s*""#).unwrap())
}

/// Site-branding token, together with any whitespace glued to its left.
fn site_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\[FreeTP\.Org\]").unwrap())
}

/// Pull the filename out of a content-disposition header value.
///
/// Matches the first double-quoted segment, trimming whitespace just inside
/// the quotes. Returns `None` when there is no quoted segment.
pub fn parse_disposition_filename(header: &str) -> Option<String> {
    filename_re()
        .captures(header)
        .map(|captures| captures[1].to_string())
}

/// Remove the `[FreeTP.Org]` branding token from a filename.
///
/// `"Foo [FreeTP.Org].zip"` becomes `"Foo.zip"`.
pub fn strip_site_tag(name: &str) -> String {
    site_tag_re().replace_all(name, "").trim().to_string()
}

/// Extension after the last `.`, or `None` when there is no dot or the
/// extension is empty.
pub fn file_extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
