//! URL and input validation utilities

use anyhow::{anyhow, Result};
use url::Url;

/// Validate URL syntax
pub fn validate_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| anyhow!("Invalid URL format: {}", e))
}

/// Check if URL is a plain web URL
pub fn is_http_url(url: &str) -> bool {
    if let Ok(parsed) = Url::parse(url) {
        let scheme = parsed.scheme();
        scheme == "http" || scheme == "https"
    } else {
        false
    }
}

/// Reduce a URL to its `scheme://host[:port]` origin.
///
/// Values that are not absolute http(s) URLs are returned trimmed but otherwise untouched.
pub fn normalize_origin(origin: &str) -> String {
    let trimmed = origin.trim();
    if !is_http_url(trimmed) {
        return trimmed.to_string();
    }

    match validate_url(trimmed) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_origin() {
        assert_eq!(normalize_origin("https://app.example"), "https://app.example");
        assert_eq!(
            normalize_origin("http://localhost:5000/watch"),
            "http://localhost:5000"
        );
        assert_eq!(normalize_origin("https://a.example:443/"), "https://a.example");
        assert_eq!(normalize_origin(" file-origin "), "file-origin");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("not a url"));
    }
}
