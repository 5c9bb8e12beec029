//! Configuration for Polish detection and language classification

use serde::{Deserialize, Serialize};

/// Main configuration for detection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectConfig {
    /// Polish detector cascade tuning
    pub detector: DetectorConfig,
    /// Classifier length gates
    pub classifier: ClassifierConfig,
}

/// Tunable thresholds for the Polish detector cascade.
///
/// The defaults are empirically tuned values; changing them shifts the
/// balance between Polish false negatives and false positives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Token count at or below which a single word-list hit is enough
    pub short_text_max_tokens: usize,
    /// Word-list hit ratio that must be exceeded for longer texts
    pub lexical_ratio: f64,
    /// Suffix hit ratio that must be exceeded
    pub suffix_ratio: f64,
    /// Minimum length before the statistical identifier is consulted
    pub statistical_min_chars: usize,
    /// Extra phrases treated as known misclassifications
    pub custom_phrases: Vec<String>,
    /// Extra brand terms for the conjunction heuristic
    pub custom_brand_terms: Vec<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            short_text_max_tokens: 3,
            lexical_ratio: 0.10,
            suffix_ratio: 0.05,
            statistical_min_chars: 10,
            custom_phrases: vec![],
            custom_brand_terms: vec![],
        }
    }
}

/// Length gates for the language classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Texts shorter than this are left unclassified
    pub min_chars: usize,
    /// Minimum length for asking the statistical identifier about non-Polish text
    pub statistical_min_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_chars: 5,
            statistical_min_chars: 10,
        }
    }
}

impl DetectConfig {
    /// Add a phrase to the known-misclassification list
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.detector.custom_phrases.push(phrase.into());
        self
    }

    /// Add a brand term for the conjunction heuristic
    pub fn with_brand_term(mut self, term: impl Into<String>) -> Self {
        self.detector.custom_brand_terms.push(term.into());
        self
    }

    /// Override the statistical minimum for both the detector and the classifier
    pub fn with_statistical_min_chars(mut self, min_chars: usize) -> Self {
        self.detector.statistical_min_chars = min_chars;
        self.classifier.statistical_min_chars = min_chars;
        self
    }
}
