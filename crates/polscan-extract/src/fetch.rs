//! Page fetching

use crate::error::Result;
use url::Url;

/// Source of raw page markup
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url`
    async fn fetch(&self, url: &Url) -> Result<String>;
}

#[cfg(feature = "web")]
pub use self::http::HttpFetcher;

#[cfg(feature = "web")]
mod http {
    use super::*;
    use crate::config::ScanConfig;
    use crate::error::ScanError;
    use reqwest::Client;
    use std::time::Duration;
    use tracing::debug;

    /// HTTP fetcher with a browser-like identity and a hard timeout.
    ///
    /// No retries: one failed request fails the scan.
    pub struct HttpFetcher {
        client: Client,
        timeout_secs: u64,
        max_body_bytes: usize,
    }

    impl HttpFetcher {
        /// Create a new fetcher with the given configuration
        pub fn new(config: &ScanConfig) -> Result<Self> {
            let client = Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .redirect(if config.follow_redirects {
                    reqwest::redirect::Policy::limited(config.max_redirects)
                } else {
                    reqwest::redirect::Policy::none()
                })
                .user_agent(&config.user_agent)
                .build()
                .map_err(|e| ScanError::Request(format!("failed to create HTTP client: {}", e)))?;

            Ok(Self {
                client,
                timeout_secs: config.timeout_secs,
                max_body_bytes: config.max_body_bytes,
            })
        }

        fn map_error(&self, err: reqwest::Error) -> ScanError {
            if err.is_timeout() {
                ScanError::Timeout(self.timeout_secs)
            } else if err.is_connect() {
                ScanError::ConnectionFailed(err.to_string())
            } else if let Some(status) = err.status() {
                ScanError::Http {
                    status: status.as_u16(),
                    message: status.canonical_reason().unwrap_or("Unknown").to_string(),
                }
            } else if err.is_decode() || err.is_body() {
                ScanError::Parse(err.to_string())
            } else {
                ScanError::Request(err.to_string())
            }
        }
    }

    #[async_trait::async_trait]
    impl PageFetcher for HttpFetcher {
        async fn fetch(&self, url: &Url) -> Result<String> {
            let response = self
                .client
                .get(url.as_str())
                .send()
                .await
                .map_err(|e| self.map_error(e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ScanError::Http {
                    status: status.as_u16(),
                    message: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            }

            if let Some(length) = response.content_length() {
                if length as usize > self.max_body_bytes {
                    return Err(ScanError::ContentTooLarge {
                        size: length as usize,
                        max: self.max_body_bytes,
                    });
                }
            }

            let body = response.text().await.map_err(|e| self.map_error(e))?;
            if body.len() > self.max_body_bytes {
                return Err(ScanError::ContentTooLarge {
                    size: body.len(),
                    max: self.max_body_bytes,
                });
            }

            debug!(url = %url, bytes = body.len(), "fetched page");
            Ok(body)
        }
    }

}
