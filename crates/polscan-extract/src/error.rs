//! Error types for page scanning

use thiserror::Error;

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that abort a page scan.
///
/// Classification failures are not listed here: they are recovered per
/// snippet inside the classifier and never surface.
#[derive(Error, Debug)]
pub enum ScanError {
    /// URL is missing a scheme or host, or does not parse
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    /// Could not connect to the host
    #[error("Failed to connect to the URL: {0}")]
    ConnectionFailed(String),

    /// Non-2xx HTTP response
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body exceeds the configured limit
    #[error("Content too large: {size} bytes exceeds max {max} bytes")]
    ContentTooLarge { size: usize, max: usize },

    /// Response body could not be read as a document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Any other request failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Whether the error comes from validating caller input rather than from the network
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScanError::InvalidUrl(_))
    }

    /// Whether the remote site or the network caused the failure
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            ScanError::Timeout(_)
                | ScanError::ConnectionFailed(_)
                | ScanError::Http { .. }
                | ScanError::ContentTooLarge { .. }
                | ScanError::Request(_)
        )
    }
}

impl From<url::ParseError> for ScanError {
    fn from(err: url::ParseError) -> Self {
        ScanError::InvalidUrl(err.to_string())
    }
}

impl From<toml::de::Error> for ScanError {
    fn from(err: toml::de::Error) -> Self {
        ScanError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ScanError {
    fn from(err: toml::ser::Error) -> Self {
        ScanError::Config(err.to_string())
    }
}
