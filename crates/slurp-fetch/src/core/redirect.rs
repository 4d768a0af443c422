/// Returns `true` if the HTTP status code instructs the client to reissue
/// the request elsewhere.
///
/// # Recognized Redirect Codes
///
/// - 301: Moved Permanently
/// - 302: Found
/// - 303: See Other
/// - 307: Temporary Redirect
/// - 308: Permanent Redirect
///
/// # Examples
///
/// ```
/// use slurp_fetch::is_redirect;
///
/// assert!(is_redirect(301));
/// assert!(is_redirect(307));
/// assert!(!is_redirect(200));
/// assert!(!is_redirect(404));
/// ```
pub fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_redirect_all_codes() {
        assert!(is_redirect(301)); // Moved Permanently
        assert!(is_redirect(302)); // Found
        assert!(is_redirect(303)); // See Other
        assert!(is_redirect(307)); // Temporary Redirect
        assert!(is_redirect(308)); // Permanent Redirect
    }

    #[test]
    fn test_is_redirect_success_codes() {
        assert!(!is_redirect(200));
        assert!(!is_redirect(201));
        assert!(!is_redirect(204));
        assert!(!is_redirect(206));
    }

    #[test]
    fn test_is_redirect_error_codes() {
        assert!(!is_redirect(400));
        assert!(!is_redirect(404));
        assert!(!is_redirect(429));
        assert!(!is_redirect(500));
        assert!(!is_redirect(503));
    }

    #[test]
    fn test_is_redirect_edge_cases() {
        // 300 and 304 are 3xx but carry no Location to follow
        assert!(!is_redirect(300));
        assert!(!is_redirect(304));
        assert!(!is_redirect(305));
        assert!(!is_redirect(0));
        assert!(!is_redirect(600));
    }
}
