//! Polish language detection cascade

use crate::config::DetectorConfig;
use crate::identifier::{LanguageIdentifier, POLISH};
use crate::normalize::char_len;
use crate::rules::{RuleSet, TOKEN_PUNCTUATION};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// The cascade step that recognised a text as Polish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A Polish-specific letter is present
    Diacritics,
    /// Apostrophe inflection on a foreign word (iPhone'a)
    Possessive,
    /// A phrase known to fool statistical detectors
    KnownPhrase,
    /// Enough tokens are common Polish words
    LexicalRatio,
    /// A Polish digraph occurs somewhere in the text
    CharPattern,
    /// Enough tokens carry a Polish inflectional ending
    SuffixRatio,
    /// Lenient checks on a one-token text
    SingleToken,
    /// Two brand names joined by the conjunction "i"
    BrandConjunction,
    /// The statistical identifier reported Polish
    Statistical,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Diacritics => "diacritics",
            Strategy::Possessive => "possessive",
            Strategy::KnownPhrase => "known-phrase",
            Strategy::LexicalRatio => "lexical-ratio",
            Strategy::CharPattern => "char-pattern",
            Strategy::SuffixRatio => "suffix-ratio",
            Strategy::SingleToken => "single-token",
            Strategy::BrandConjunction => "brand-conjunction",
            Strategy::Statistical => "statistical",
        };
        f.write_str(name)
    }
}

/// Per-call view of the text shared by all predicates
struct Sample<'a> {
    original: &'a str,
    lower: String,
    /// Whitespace-split lower-cased tokens, punctuation intact
    words: Vec<String>,
}

type Predicate = fn(&PolishDetector, &Sample<'_>) -> bool;

/// Cheap deterministic checks, evaluated in order before the statistical fallback
const HEURISTICS: &[(Strategy, Predicate)] = &[
    (Strategy::Diacritics, PolishDetector::has_diacritics),
    (Strategy::Possessive, PolishDetector::has_possessive),
    (Strategy::KnownPhrase, PolishDetector::has_known_phrase),
    (Strategy::LexicalRatio, PolishDetector::lexical_ratio),
    (Strategy::CharPattern, PolishDetector::has_char_pattern),
    (Strategy::SuffixRatio, PolishDetector::suffix_ratio),
    (Strategy::SingleToken, PolishDetector::single_token),
    (Strategy::BrandConjunction, PolishDetector::brand_conjunction),
];

/// Decides whether a snippet is Polish.
///
/// Strategies run as an ordered cascade and the first hit wins. The
/// statistical identifier is only consulted after every heuristic missed,
/// since the heuristics exist to correct its mistakes on short or mixed text.
#[derive(Clone)]
pub struct PolishDetector {
    config: DetectorConfig,
    rules: Arc<RuleSet>,
    identifier: Arc<dyn LanguageIdentifier>,
}

impl fmt::Debug for PolishDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolishDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PolishDetector {
    /// Create a detector using the built-in rules plus any configured extensions
    pub fn new(config: DetectorConfig, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        let rules = RuleSet::with_extensions(&config.custom_phrases, &config.custom_brand_terms);
        Self {
            config,
            rules,
            identifier,
        }
    }

    /// Replace the rule set
    pub fn with_rules(mut self, rules: Arc<RuleSet>) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The identifier used by the statistical fallback
    pub fn identifier(&self) -> &Arc<dyn LanguageIdentifier> {
        &self.identifier
    }

    /// Whether `text` is Polish
    pub fn is_polish(&self, text: &str) -> bool {
        self.detect(text).is_some()
    }

    /// Run the cascade and report which strategy fired, if any
    pub fn detect(&self, text: &str) -> Option<Strategy> {
        let sample = Sample::new(text);

        for (strategy, predicate) in HEURISTICS {
            if predicate(self, &sample) {
                trace!(%strategy, "Polish heuristic matched");
                return Some(*strategy);
            }
        }

        if self.statistical(&sample) {
            trace!(strategy = %Strategy::Statistical, "Polish heuristic matched");
            return Some(Strategy::Statistical);
        }

        None
    }

    fn has_diacritics(&self, sample: &Sample<'_>) -> bool {
        sample.lower.chars().any(|c| self.rules.is_diacritic(c))
    }

    fn has_possessive(&self, sample: &Sample<'_>) -> bool {
        self.rules
            .possessive_markers()
            .any(|marker| sample.lower.contains(marker))
    }

    fn has_known_phrase(&self, sample: &Sample<'_>) -> bool {
        self.rules.phrases().any(|phrase| sample.lower.contains(phrase))
    }

    fn lexical_ratio(&self, sample: &Sample<'_>) -> bool {
        if sample.words.is_empty() {
            return false;
        }

        let hits = sample
            .tokens()
            .filter(|token| self.rules.is_word(token))
            .count();

        if sample.words.len() <= self.config.short_text_max_tokens && hits >= 1 {
            return true;
        }

        hits as f64 / sample.words.len() as f64 > self.config.lexical_ratio
    }

    fn has_char_pattern(&self, sample: &Sample<'_>) -> bool {
        let found = self
            .rules
            .char_patterns()
            .filter(|pattern| sample.lower.contains(pattern))
            .count();
        found >= 1
    }

    fn suffix_ratio(&self, sample: &Sample<'_>) -> bool {
        if sample.words.is_empty() {
            return false;
        }

        let hits = sample
            .tokens()
            .filter(|token| self.rules.suffixes().any(|suffix| token.ends_with(suffix)))
            .count();

        hits as f64 / sample.words.len() as f64 > self.config.suffix_ratio
    }

    fn single_token(&self, sample: &Sample<'_>) -> bool {
        if sample.words.len() != 1 {
            return false;
        }

        let token = strip_token(&sample.words[0]);
        self.rules.is_word(token)
            || self.rules.suffixes().any(|suffix| token.contains(suffix))
            || self.rules.char_patterns().any(|pattern| token.contains(pattern))
    }

    fn brand_conjunction(&self, sample: &Sample<'_>) -> bool {
        let words = &sample.words;
        if words.len() < 3 {
            return false;
        }

        let mut neighbours = Vec::new();
        for i in 1..words.len() - 1 {
            if words[i] == "i" {
                neighbours.push(words[i - 1].as_str());
                neighbours.push(words[i + 1].as_str());
            }
        }

        neighbours
            .iter()
            .any(|word| self.rules.brand_terms().any(|term| word.contains(term)))
    }

    fn statistical(&self, sample: &Sample<'_>) -> bool {
        if char_len(sample.original) < self.config.statistical_min_chars {
            return false;
        }

        match self.identifier.identify(sample.original) {
            Ok(code) => code == POLISH,
            Err(err) => {
                trace!(error = %err, "statistical identifier failed, treating as not Polish");
                false
            }
        }
    }
}

impl<'a> Sample<'a> {
    fn new(original: &'a str) -> Self {
        let lower = original.trim().to_lowercase();
        let words = lower.split_whitespace().map(str::to_string).collect();
        Self {
            original,
            lower,
            words,
        }
    }

    /// Tokens with surrounding punctuation removed
    fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|word| strip_token(word))
    }
}

fn strip_token(word: &str) -> &str {
    word.trim_matches(TOKEN_PUNCTUATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Strategy;
    use crate::config::DetectConfig;
    use crate::error::{DetectionError, Result};
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Identifier that always answers with a fixed code and counts its calls
    struct FixedIdentifier {
        code: &'static str,
        calls: AtomicUsize,
    }

    impl FixedIdentifier {
        fn new(code: &'static str) -> Arc<Self> {
            Arc::new(Self {
                code,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl LanguageIdentifier for FixedIdentifier {
        fn identify(&self, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.code.to_string())
        }
    }

    struct FailingIdentifier;

    impl LanguageIdentifier for FailingIdentifier {
        fn identify(&self, _text: &str) -> Result<String> {
            Err(DetectionError::Backend("model not loaded".to_string()))
        }
    }

    fn detector(code: &'static str) -> PolishDetector {
        PolishDetector::new(DetectorConfig::default(), FixedIdentifier::new(code))
    }

    #[test]
    fn test_diacritics_any_case() {
        let d = detector("en");
        assert_eq!(d.detect("Zażółć gęślą jaźń"), Some(Strategy::Diacritics));
        assert_eq!(d.detect("ŁÓDŹ CITY"), Some(Strategy::Diacritics));
    }

    #[test]
    fn test_possessive_marker() {
        let d = detector("en");
        assert_eq!(d.detect("Kup iPhone'a"), Some(Strategy::Possessive));
        assert_eq!(d.detect("Pay with Apple'em Pay"), Some(Strategy::Possessive));
    }

    #[test]
    fn test_known_phrase() {
        let d = detector("en");
        assert_eq!(d.detect("iPhone i Mac"), Some(Strategy::KnownPhrase));
        assert_eq!(d.detect("Mapa witryny"), Some(Strategy::KnownPhrase));
    }

    #[test]
    fn test_lexical_ratio() {
        let d = detector("en");
        assert_eq!(d.detect("Kup teraz nowy iPhone"), Some(Strategy::LexicalRatio));
        // Short texts need a single hit, punctuation stripped
        assert_eq!(d.detect("Kontakt!"), Some(Strategy::LexicalRatio));
    }

    #[test]
    fn test_lexical_ratio_threshold_for_long_text() {
        let d = detector("en");
        // 1 of 10 tokens is exactly 10%, which is not above the threshold
        let text = "one two three four five six seven eight nine teraz";
        assert_ne!(d.detect(text), Some(Strategy::LexicalRatio));
    }

    #[test]
    fn test_char_pattern() {
        let d = detector("en");
        assert_eq!(d.detect("Szybko"), Some(Strategy::CharPattern));
    }

    #[test]
    fn test_suffix_ratio() {
        let d = detector("en");
        assert_eq!(d.detect("super nowe telefony tanie"), Some(Strategy::SuffixRatio));
    }

    #[test]
    fn test_single_token() {
        let d = detector("en");
        assert_eq!(d.detect("Kowalski"), Some(Strategy::SingleToken));
    }

    #[test]
    fn test_brand_conjunction() {
        let d = detector("en");
        assert_eq!(d.detect("iPad i Watch"), Some(Strategy::BrandConjunction));
        // "i" must be a standalone middle token
        assert_eq!(d.detect("i Watch"), None);
    }

    #[test]
    fn test_custom_brand_term() {
        let config = DetectorConfig {
            custom_brand_terms: vec!["Pixel".to_string()],
            ..Default::default()
        };
        let d = PolishDetector::new(config, FixedIdentifier::new("en"));
        assert_eq!(d.detect("Pixel i Galaxy"), Some(Strategy::BrandConjunction));
        assert_eq!(detector("en").detect("Pixel i Galaxy"), None);
    }

    #[test]
    fn test_custom_phrase() {
        let config = DetectConfig::default().with_phrase("Trade In").detector;
        let d = PolishDetector::new(config, FixedIdentifier::new("en"));
        assert_eq!(d.detect("Apple Trade In program"), Some(Strategy::KnownPhrase));
        assert_eq!(detector("en").detect("Apple Trade In program"), None);
    }

    #[test]
    fn test_replaced_rules() {
        let rules = RuleSet::with_extensions(&["trade in".to_string()], &[]);
        let d = detector("en").with_rules(rules);
        assert_eq!(d.detect("Apple Trade In program"), Some(Strategy::KnownPhrase));
        // Built-in rules are still part of the extended set
        assert_eq!(d.detect("Mapa witryny"), Some(Strategy::KnownPhrase));
    }

    #[test]
    fn test_english_is_not_polish() {
        let d = detector("en");
        assert!(!d.is_polish("Buy the new device today"));
    }

    #[test]
    fn test_statistical_fallback() {
        let d = detector("pl");
        assert_eq!(d.detect("Hello there friend"), Some(Strategy::Statistical));
    }

    #[test]
    fn test_statistical_skipped_for_short_text() {
        let identifier = FixedIdentifier::new("pl");
        let d = PolishDetector::new(DetectorConfig::default(), identifier.clone());
        assert_eq!(d.detect("Hi folks"), None);
        assert_eq!(identifier.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_statistical_failure_is_not_polish() {
        let d = PolishDetector::new(DetectorConfig::default(), Arc::new(FailingIdentifier));
        assert!(!d.is_polish("Buy the new device today"));
    }

    #[test]
    fn test_heuristics_run_before_statistical() {
        let identifier = FixedIdentifier::new("en");
        let d = PolishDetector::new(DetectorConfig::default(), identifier.clone());
        assert!(d.is_polish("Sprawdź nasze najnowsze produkty w sklepie"));
        assert_eq!(identifier.calls.load(Ordering::SeqCst), 0);

        assert!(!d.is_polish("Buy the new device today"));
        assert_eq!(identifier.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(detector("pl").detect(""), None);
        assert_eq!(detector("pl").detect("   "), None);
    }

    proptest! {
        #[test]
        fn prop_diacritic_always_polish(
            prefix in "[a-zA-Z0-9 ,.!?]{0,30}",
            letter in prop::sample::select(vec!['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż', 'Ą', 'Ł', 'Ż']),
            suffix in "[a-zA-Z0-9 ,.!?]{0,30}",
        ) {
            let text = format!("{}{}{}", prefix, letter, suffix);
            prop_assert_eq!(detector("en").detect(&text), Some(Strategy::Diacritics));
        }

        #[test]
        fn prop_short_text_with_word_is_polish(
            filler in prop::collection::vec("[xq]{2,6}", 0..=2),
            word in prop::sample::select(vec!["kup", "teraz", "sklep", "kontakt", "dla"]),
            position in 0usize..3,
        ) {
            let mut tokens: Vec<String> = filler;
            let at = position.min(tokens.len());
            tokens.insert(at, word.to_string());
            let text = tokens.join(" ");
            prop_assert!(detector("en").is_polish(&text));
        }
    }
}
