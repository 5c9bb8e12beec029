//! Reference data for the Polish detector

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

/// Common Polish word-forms, matched exactly against lower-cased tokens
const COMMON_WORDS: &[&str] = &[
    // Function words and adverbs
    "aby", "ale", "albo", "jako", "oraz", "tylko", "także", "bardzo",
    "można", "należy", "przez", "gdzie", "które", "wszystkich",
    "zostać", "będzie", "został", "została", "zostało", "zostały",
    "może", "mogą", "musi", "musisz", "powinien", "powinna", "powinno",
    "więc", "więcej", "podczas", "między", "wiele", "każdy", "każda",
    "jakie", "jaki", "jaka", "tutaj", "teraz", "wtedy", "nigdy",
    "zawsze", "często", "czasem", "czasami", "dziś", "dzisiaj",
    // Calls to action
    "poznaj", "kup", "kupuj", "stworzony", "dla", "spersonalizuj",
    "modele", "model", "wybierz", "sprawdź", "zobacz", "odkryj",
    "znajdź", "dowiedz", "się", "informacji", "produkty",
    "usługi", "sklep", "wsparcie", "pomoc", "kontakt", "firma",
    "biznes", "biznesu", "rozrywka", "aplikacje", "gry", "muzyka",
    "filmy", "książki", "portfel", "płatności", "bezpieczeństwo",
    // Device vocabulary
    "aparat", "zdjęcia", "wideo", "nagrywanie", "odtwarzanie",
    "wyświetlacz", "ekran", "bateria", "ładowanie", "pamięć",
    "procesor", "kamera", "mikrofon", "głośnik", "słuchawki",
    // Site navigation
    "mapa", "witryny", "stopka", "akcesoria", "aplikacja", "apka",
    "konto", "konta", "sklepu",
    // Prepositions
    "do", "w", "na", "za", "pod", "nad", "przy", "bez", "od", "po",
    "ze", "we", "przed", "według",
];

/// Letters that only occur in Polish among the languages we care about
const DIACRITICS: &[char] = &['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż'];

/// Digraphs and diacritics counted as substrings
const CHAR_PATTERNS: &[&str] = &[
    "ą", "ć", "ę", "ł", "ń", "ó", "ś", "ź", "ż",
    "cz", "sz", "rz", "dz", "dż", "dź",
];

/// Inflectional endings
const SUFFIXES: &[&str] = &[
    "ość", "anie", "enie", "owy", "owa", "owe", "emy", "ecie",
    "ować", "ąć", "nąć", "ić", "yć", "ych", "ymi", "ami", "ach",
    "iej", "iego", "ę", "ą", "em", "ie", "ów",
    "uj", "esz", "isz", "asz", "uje", "uję", "iesz",
];

/// Polish inflection glued to a foreign name with an apostrophe (iPhone'a)
const POSSESSIVE_MARKERS: &[&str] = &["'a", "'em", "'ie", "'y", "'ę", "'ą"];

/// Phrases that generic detectors are known to misclassify
const KNOWN_PHRASES: &[&str] = &[
    "mapa witryny",
    "akcesoria do",
    "stopka apple",
    "aplikacja apple",
    "konto w apple",
    "iphone i mac",
    "iphone i apple",
    "iphone i airpods",
];

/// Product names commonly joined by the Polish conjunction "i"
const BRAND_TERMS: &[&str] = &["iphone", "apple", "mac", "airpods", "watch", "ipad", "imac"];

/// Punctuation stripped from both ends of a token before matching
pub const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}'];

static POLISH_RULES: Lazy<Arc<RuleSet>> = Lazy::new(|| Arc::new(RuleSet::build(&[], &[])));

/// Read-only reference collections used by the detector cascade
#[derive(Debug, Clone)]
pub struct RuleSet {
    words: HashSet<String>,
    diacritics: Vec<char>,
    char_patterns: Vec<String>,
    suffixes: Vec<String>,
    possessive_markers: Vec<String>,
    phrases: Vec<String>,
    brand_terms: Vec<String>,
}

impl RuleSet {
    /// The shared built-in Polish rule set
    pub fn polish() -> Arc<RuleSet> {
        Arc::clone(&POLISH_RULES)
    }

    /// Built-in rules extended with extra phrases and brand terms
    pub fn with_extensions(phrases: &[String], brand_terms: &[String]) -> Arc<RuleSet> {
        if phrases.is_empty() && brand_terms.is_empty() {
            return Self::polish();
        }
        Arc::new(Self::build(phrases, brand_terms))
    }

    fn build(extra_phrases: &[String], extra_brand_terms: &[String]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut phrases = owned(KNOWN_PHRASES);
        phrases.extend(extra_phrases.iter().map(|p| p.to_lowercase()));

        let mut brand_terms = owned(BRAND_TERMS);
        brand_terms.extend(extra_brand_terms.iter().map(|t| t.to_lowercase()));

        Self {
            words: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
            diacritics: DIACRITICS.to_vec(),
            char_patterns: owned(CHAR_PATTERNS),
            suffixes: owned(SUFFIXES),
            possessive_markers: owned(POSSESSIVE_MARKERS),
            phrases,
            brand_terms,
        }
    }

    /// Exact word-list membership for an already lower-cased, stripped token
    pub fn is_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn is_diacritic(&self, c: char) -> bool {
        self.diacritics.contains(&c)
    }

    pub fn char_patterns(&self) -> impl Iterator<Item = &str> {
        self.char_patterns.iter().map(String::as_str)
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn possessive_markers(&self) -> impl Iterator<Item = &str> {
        self.possessive_markers.iter().map(String::as_str)
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn brand_terms(&self) -> impl Iterator<Item = &str> {
        self.brand_terms.iter().map(String::as_str)
    }

    /// Number of entries in the word list
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
