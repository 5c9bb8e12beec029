//! End-to-end detection scenarios against the whatlang backend

#[cfg(feature = "whatlang")]
mod whatlang_scenarios {
    use polscan_detect::{normalize, LanguageClassifier, Strategy, POLISH};

    #[test]
    fn test_call_to_action_is_polish() {
        let classifier = LanguageClassifier::whatlang();
        let text = normalize("Kup teraz nowy iPhone");
        assert_eq!(
            classifier.detector().detect(&text),
            Some(Strategy::LexicalRatio)
        );
        assert_eq!(classifier.classify(&text).as_deref(), Some(POLISH));
    }

    #[test]
    fn test_english_sentence_is_reported() {
        let classifier = LanguageClassifier::whatlang();
        let text = normalize("Buy the new device today");
        assert!(!classifier.detector().is_polish(&text));

        let code = classifier.classify(&text);
        assert!(LanguageClassifier::is_reportable(code.as_deref()), "got {:?}", code);
    }

    #[test]
    fn test_brand_conjunction_is_polish() {
        let classifier = LanguageClassifier::whatlang();
        assert!(classifier.detector().is_polish("iPhone i Mac"));
        assert!(classifier.detector().is_polish("iPad i Watch"));
    }

    #[test]
    fn test_symbol_snippet_is_discarded() {
        assert_eq!(normalize("123 456 !!!"), "");
    }

    #[test]
    fn test_long_english_paragraph() {
        let classifier = LanguageClassifier::whatlang();
        let text = normalize(
            "The quick brown fox jumps over the lazy dog while the farmer watches \
             from the porch and wonders what the weather will bring tomorrow.",
        );
        assert_eq!(classifier.classify(&text).as_deref(), Some("en"));
    }

    #[test]
    fn test_filtering_law() {
        let classifier = LanguageClassifier::whatlang();
        let samples = [
            "Zobacz więcej",
            "Buy the new device today",
            "123 456 !!!",
            "Hi folks",
            "Mapa witryny",
            "Learn more about our products and services",
        ];

        for raw in samples {
            let text = normalize(raw);
            if text.is_empty() {
                continue;
            }
            let code = classifier.classify(&text);
            let reportable = LanguageClassifier::is_reportable(code.as_deref());
            assert_eq!(reportable, code.is_some() && code.as_deref() != Some(POLISH));
            if classifier.detector().is_polish(&text) && text.chars().count() >= 5 {
                assert!(!reportable, "{:?} is Polish but reportable", text);
            }
        }
    }
}
