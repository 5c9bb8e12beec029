//! Language classification of text snippets

use crate::config::{ClassifierConfig, DetectConfig};
use crate::detector::PolishDetector;
use crate::identifier::{LanguageIdentifier, POLISH};
use crate::normalize::char_len;
use std::sync::Arc;
use tracing::debug;

/// Assigns a language code to a snippet, or `None` when it cannot be trusted.
///
/// Polish is decided by the [`PolishDetector`] cascade. Anything else is
/// passed to the statistical identifier once it is long enough, and the
/// identifier's answer is forwarded unchanged.
#[derive(Debug, Clone)]
pub struct LanguageClassifier {
    config: ClassifierConfig,
    detector: PolishDetector,
}

impl LanguageClassifier {
    /// Create a classifier whose detector and fallback share one identifier
    pub fn new(config: DetectConfig, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        Self {
            config: config.classifier,
            detector: PolishDetector::new(config.detector, identifier),
        }
    }

    /// Build around an existing detector
    pub fn with_detector(config: ClassifierConfig, detector: PolishDetector) -> Self {
        Self { config, detector }
    }

    /// Classifier backed by whatlang with default thresholds
    #[cfg(feature = "whatlang")]
    pub fn whatlang() -> Self {
        Self::new(
            DetectConfig::default(),
            Arc::new(crate::identifier::WhatlangIdentifier::new()),
        )
    }

    pub fn detector(&self) -> &PolishDetector {
        &self.detector
    }

    /// Classify a normalized snippet. Never fails.
    pub fn classify(&self, text: &str) -> Option<String> {
        let len = char_len(text);
        if len < self.config.min_chars {
            return None;
        }

        if self.detector.is_polish(text) {
            return Some(POLISH.to_string());
        }

        if len < self.config.statistical_min_chars {
            return None;
        }

        match self.detector.identifier().identify(text) {
            Ok(code) if !code.is_empty() => Some(code),
            Ok(_) => None,
            Err(err) => {
                debug!(error = %err, "language identification failed");
                None
            }
        }
    }

    /// Whether a classification result belongs in the non-Polish report
    pub fn is_reportable(code: Option<&str>) -> bool {
        matches!(code, Some(code) if code != POLISH)
    }
}
