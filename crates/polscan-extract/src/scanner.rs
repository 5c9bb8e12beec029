//! Page scan pipeline: fetch, collect, classify, filter

use crate::collector::TextCollector;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::result::{ClassifiedSnippet, ScanReport, Snippet};
use crate::validate::prepare_url;
use polscan_detect::{LanguageClassifier, LanguageIdentifier, POLISH};
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "web")]
use crate::fetch::HttpFetcher;
use crate::fetch::PageFetcher;

/// Runs the whole analysis for one page.
///
/// Holds no per-page state, so one scanner can serve concurrent requests.
pub struct Scanner {
    fetcher: Arc<dyn PageFetcher>,
    collector: TextCollector,
    classifier: LanguageClassifier,
}

impl Scanner {
    /// Assemble a scanner from explicit parts
    pub fn new(
        config: &ScanConfig,
        fetcher: Arc<dyn PageFetcher>,
        identifier: Arc<dyn LanguageIdentifier>,
    ) -> Self {
        Self {
            fetcher,
            collector: TextCollector::new(config),
            classifier: LanguageClassifier::new(config.detect.clone(), identifier),
        }
    }

    /// HTTP fetching with whatlang as the statistical fallback
    #[cfg(feature = "web")]
    pub fn http(config: &ScanConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(
            config,
            Arc::new(fetcher),
            Arc::new(polscan_detect::WhatlangIdentifier::new()),
        ))
    }

    pub fn classifier(&self) -> &LanguageClassifier {
        &self.classifier
    }

    /// Validate `url`, fetch it and build the report.
    ///
    /// URL and fetch failures abort the scan; nothing partial is returned.
    pub async fn scan(&self, url: &str) -> Result<ScanReport> {
        let url = prepare_url(url)?;

        info!(url = %url, "fetching content");
        let html = self.fetcher.fetch(&url).await?;

        Ok(self.analyze(url.as_str(), &html))
    }

    /// Build the report for already fetched markup
    pub fn analyze(&self, source: &str, html: &str) -> ScanReport {
        let snippets = self.collector.collect(html);
        info!(elements = snippets.len(), "extracted text elements");

        let report = self.filter(source, snippets);
        info!(
            polish = report.polish_filtered,
            unclassified = report.unclassified,
            non_polish = report.len(),
            "classified snippets"
        );
        report
    }

    /// Classify each snippet and keep the non-Polish ones
    pub fn filter(&self, source: &str, snippets: Vec<Snippet>) -> ScanReport {
        let mut report = ScanReport::new(source);
        report.total_snippets = snippets.len();

        for snippet in snippets {
            match self.classifier.classify(&snippet.raw_text) {
                Some(code) if code == POLISH => report.polish_filtered += 1,
                Some(code) => report.entries.push(ClassifiedSnippet {
                    tag_name: snippet.tag_name,
                    language_code: code,
                    text: snippet.raw_text,
                }),
                None => report.unclassified += 1,
            }
        }

        report
    }
}
