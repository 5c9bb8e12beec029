//! URL preparation and validation

use crate::error::{Result, ScanError};
use url::Url;

/// Turn user input into a fetchable URL.
///
/// Input without an `http://` or `https://` prefix gets `https://` prepended.
/// The result must parse and carry both a scheme and a host.
pub fn prepare_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("no URL provided".to_string()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    validate_url(&url)?;
    Ok(url)
}

/// Check that a parsed URL has a scheme and a host
pub fn validate_url(url: &Url) -> Result<()> {
    if url.scheme().is_empty() {
        return Err(ScanError::InvalidUrl(format!("{}: missing scheme", url)));
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ScanError::InvalidUrl(format!("{}: missing host", url))),
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_https_when_missing() {
        let url = prepare_url("www.apple.com/pl/").unwrap();
        assert_eq!(url.as_str(), "https://www.apple.com/pl/");
    }

    #[test]
    fn test_keeps_explicit_scheme() {
        let url = prepare_url("  http://example.com ").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(prepare_url("   "), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(prepare_url("not a url"), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(prepare_url("https://"), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_hostless_url() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(validate_url(&url).is_err());
    }
}
