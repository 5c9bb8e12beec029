//! Error types for language detection

use thiserror::Error;

/// Result type alias for detection operations
pub type Result<T> = std::result::Result<T, DetectionError>;

/// Failures reported by a statistical language identifier.
///
/// These never escape the classifier: every variant is mapped to
/// "not Polish" or "unknown language" at the call site.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectionError {
    /// Input is shorter than the identifier can handle
    #[error("Text too short for detection: {len} chars (min {min})")]
    TooShort { len: usize, min: usize },

    /// Identifier could not settle on any language
    #[error("No language could be determined")]
    Undetermined,

    /// Identifier produced a guess below the confidence floor
    #[error("Detection confidence {confidence:.2} below threshold {threshold:.2}")]
    LowConfidence { confidence: f64, threshold: f64 },

    /// Backend-specific failure
    #[error("Language identifier error: {0}")]
    Backend(String),
}
