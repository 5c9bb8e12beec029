//! # Polscan Detect
//!
//! Heuristic Polish-language detection with a statistical fallback.
//!
//! Generic language identifiers are unreliable on the short, brand-heavy
//! snippets found on localized product pages: "iPhone i Mac" comes back as
//! Swahili, "Akcesoria do" as Portuguese. This crate runs a cascade of cheap
//! Polish-specific checks first and only then asks a statistical identifier.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polscan_detect::{normalize, LanguageClassifier};
//!
//! let classifier = LanguageClassifier::whatlang();
//! let text = normalize("  Kup teraz\n nowy iPhone ");
//!
//! assert!(classifier.detector().is_polish(&text));
//! assert_eq!(classifier.classify(&text).as_deref(), Some("pl"));
//! ```
//!
//! ## Cascade
//!
//! ```text
//! diacritics ─► possessive ─► known phrase ─► lexical ratio ─► digraphs
//!     ─► suffix ratio ─► single token ─► brand conjunction ─► statistical
//! ```
//!
//! The first step that matches wins.

pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod identifier;
pub mod normalize;
pub mod rules;

pub use classifier::LanguageClassifier;
pub use config::{ClassifierConfig, DetectConfig, DetectorConfig};
pub use detector::{PolishDetector, Strategy};
pub use error::{DetectionError, Result};
pub use identifier::{LanguageIdentifier, NoopIdentifier, POLISH};
pub use normalize::normalize;
pub use rules::RuleSet;

#[cfg(feature = "whatlang")]
pub use identifier::WhatlangIdentifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::LanguageClassifier;
    pub use crate::config::DetectConfig;
    pub use crate::detector::{PolishDetector, Strategy};
    pub use crate::error::{DetectionError, Result};
    pub use crate::identifier::{LanguageIdentifier, POLISH};
    pub use crate::normalize::normalize;
}
