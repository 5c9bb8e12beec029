//! Scanner configuration

use crate::error::Result;
use polscan_detect::DetectConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Suggested filename for the rendered report
pub const REPORT_FILENAME: &str = "non_polish_text_results.html";

/// Environment variable overriding the request timeout
pub const TIMEOUT_ENV: &str = "POLSCAN_TIMEOUT_SECS";

/// Desktop Chrome identification, so sites don't serve a bot-blocking page
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Content-bearing tags, in collection order
pub const TEXT_TAGS: &[&str] = &[
    "div", "p", "span", "a", "h1", "h2", "h3", "h4", "h5", "h6",
    "article", "section", "main", "nav", "aside", "footer", "header",
    "blockquote", "li", "td", "th", "caption", "label", "button",
    "strong", "em", "b", "i", "mark", "small", "del", "ins", "sub",
    "sup", "code", "pre", "cite", "q", "abbr", "time", "address",
    "figcaption", "summary", "details",
];

/// Tags whose subtrees are never visible
pub const IGNORED_TAGS: &[&str] = &["script", "style", "meta", "link", "noscript", "template"];

/// Configuration for a page scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent for web requests
    pub user_agent: String,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// Maximum redirects to follow
    pub max_redirects: usize,

    /// Maximum response body size in bytes
    pub max_body_bytes: usize,

    /// Tags collected as snippets, in order
    pub text_tags: Vec<String>,

    /// Tags removed before collection
    pub ignored_tags: Vec<String>,

    /// Filename used when writing or offering the report
    pub output_filename: String,

    /// Detection thresholds
    pub detect: DetectConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: BROWSER_USER_AGENT.to_string(),
            follow_redirects: true,
            max_redirects: 10,
            max_body_bytes: 20 * 1024 * 1024,
            text_tags: TEXT_TAGS.iter().map(|t| t.to_string()).collect(),
            ignored_tags: IGNORED_TAGS.iter().map(|t| t.to_string()).collect(),
            output_filename: REPORT_FILENAME.to_string(),
            detect: DetectConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Load a TOML config file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Write the config as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(secs) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            self.timeout_secs = secs;
        }
        self
    }

    /// Create a new config with custom timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create a new config with custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a new config with a custom body size limit
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Replace the detection thresholds
    pub fn with_detect(mut self, detect: DetectConfig) -> Self {
        self.detect = detect;
        self
    }
}
