//! Splitting a raw URL into `&`-separated segments for readable display.

/// Splits `url` on every `&`.
///
/// Purely textual: no parsing, no decoding, never fails. A URL without `&` is
/// one segment and the empty string yields a single empty segment.
pub fn url_segments(url: &str) -> Vec<&str> {
    url.split('&').collect()
}
