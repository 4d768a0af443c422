/// Parse a `Content-Length` header value leniently.
///
/// Absent, empty, or non-numeric values are tolerated and reported as
/// `None` (unknown total) rather than as errors; the progress model falls
/// back to byte counting in that case.
///
/// # Examples
///
/// ```
/// use slurp_fetch::core::parse_content_length;
///
/// assert_eq!(parse_content_length("2560"), Some(2560));
/// assert_eq!(parse_content_length("  42 "), Some(42));
/// assert_eq!(parse_content_length("chunked"), None);
/// assert_eq!(parse_content_length(""), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

/// Extract the host portion of a URL for diagnostic lines.
///
/// This is a display helper, not a validator: it strips the scheme and
/// userinfo, then cuts at the first of `/`, `:`, `?`, or `#`. Anything
/// that does not look like a URL is returned unchanged.
pub fn host(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let rest = match rest.rfind('@') {
        Some(idx) if !rest[..idx].contains('/') => &rest[idx + 1..],
        _ => rest,
    };
    match rest.find(['/', ':', '?', '#']) {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}
