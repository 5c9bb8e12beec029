//! Statistical language identification backends

use crate::error::{DetectionError, Result};

/// ISO 639-1 code reserved for Polish
pub const POLISH: &str = "pl";

/// A generic, corpus-trained language identifier.
///
/// Implementations must be deterministic for a given input. They are
/// unreliable on short or code-mixed text, which is why the detector only
/// consults them after every heuristic has passed.
pub trait LanguageIdentifier: Send + Sync {
    /// Return a best-guess ISO 639-1 language code for `text`
    fn identify(&self, text: &str) -> Result<String>;
}

/// Identifier that never reaches a verdict
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIdentifier;

impl LanguageIdentifier for NoopIdentifier {
    fn identify(&self, _text: &str) -> Result<String> {
        Err(DetectionError::Undetermined)
    }
}

#[cfg(feature = "whatlang")]
pub use self::whatlang_backend::WhatlangIdentifier;

#[cfg(feature = "whatlang")]
mod whatlang_backend {
    use super::*;
    use whatlang::{Detector, Lang};

    /// Trigram-based identifier backed by the `whatlang` crate
    pub struct WhatlangIdentifier {
        detector: Detector,
        min_confidence: f64,
    }

    impl Default for WhatlangIdentifier {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WhatlangIdentifier {
        pub fn new() -> Self {
            Self {
                detector: Detector::new(),
                min_confidence: 0.0,
            }
        }

        /// Reject guesses whose confidence is below `min_confidence`
        pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
            self.min_confidence = min_confidence;
            self
        }
    }

    impl LanguageIdentifier for WhatlangIdentifier {
        fn identify(&self, text: &str) -> Result<String> {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(DetectionError::TooShort { len: 0, min: 1 });
            }

            let info = self
                .detector
                .detect(trimmed)
                .ok_or(DetectionError::Undetermined)?;

            if info.confidence() < self.min_confidence {
                return Err(DetectionError::LowConfidence {
                    confidence: info.confidence(),
                    threshold: self.min_confidence,
                });
            }

            Ok(iso_639_1(info.lang()).to_string())
        }
    }

    /// Map whatlang's ISO 639-3 languages onto two-letter codes
    fn iso_639_1(lang: Lang) -> &'static str {
        match lang {
            Lang::Eng => "en",
            Lang::Pol => "pl",
            Lang::Deu => "de",
            Lang::Fra => "fr",
            Lang::Spa => "es",
            Lang::Ita => "it",
            Lang::Por => "pt",
            Lang::Nld => "nl",
            Lang::Rus => "ru",
            Lang::Ukr => "uk",
            Lang::Bel => "be",
            Lang::Ces => "cs",
            Lang::Slk => "sk",
            Lang::Slv => "sl",
            Lang::Hrv => "hr",
            Lang::Srp => "sr",
            Lang::Bul => "bg",
            Lang::Mkd => "mk",
            Lang::Ron => "ro",
            Lang::Hun => "hu",
            Lang::Lit => "lt",
            Lang::Lav => "lv",
            Lang::Est => "et",
            Lang::Fin => "fi",
            Lang::Swe => "sv",
            Lang::Dan => "da",
            Lang::Nob => "no",
            Lang::Tur => "tr",
            Lang::Ell => "el",
            Lang::Cat => "ca",
            Lang::Lat => "la",
            Lang::Afr => "af",
            Lang::Epo => "eo",
            Lang::Ind => "id",
            Lang::Tgl => "tl",
            Lang::Vie => "vi",
            Lang::Cmn => "zh",
            Lang::Jpn => "ja",
            Lang::Kor => "ko",
            Lang::Ara => "ar",
            Lang::Heb => "he",
            Lang::Hin => "hi",
            Lang::Tha => "th",
            // Fall back to the three-letter code when no two-letter one is mapped
            other => other.code(),
        }
    }

}
