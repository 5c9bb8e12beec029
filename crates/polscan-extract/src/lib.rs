//! # Polscan Extract
//!
//! Fetch a web page, collect its visible text and report every snippet that
//! is not in Polish. Useful for auditing the localization of a Polish site.
//!
//! ## Example
//!
//! ```rust,ignore
//! use polscan_extract::{ScanConfig, Scanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scanner = Scanner::http(&ScanConfig::default())?;
//!     let report = scanner.scan("www.apple.com/pl").await?;
//!     println!("{} non-Polish snippets", report.len());
//!     std::fs::write("non_polish_text_results.html", report.to_html())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐     ┌──────────┐
//! │   Fetcher   │ ──► │  Collector   │ ──► │   Classifier    │ ──► │  Report  │
//! │  (reqwest)  │     │  (scraper)   │     │ (polscan-detect)│     │  (HTML)  │
//! └─────────────┘     └──────────────┘     └─────────────────┘     └──────────┘
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod result;
pub mod scanner;
pub mod validate;

pub use collector::TextCollector;
pub use config::{ScanConfig, REPORT_FILENAME};
pub use error::{Result, ScanError};
pub use fetch::PageFetcher;
pub use result::{ClassifiedSnippet, ScanReport, Snippet};
pub use scanner::Scanner;
pub use validate::prepare_url;

#[cfg(feature = "web")]
pub use fetch::HttpFetcher;
