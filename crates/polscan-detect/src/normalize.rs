//! Snippet text normalization

/// Shortest snippet worth keeping, in characters
pub const MIN_SNIPPET_CHARS: usize = 3;

/// Collapse whitespace and reject degenerate snippets.
///
/// Every whitespace run (newlines and tabs included) becomes a single space
/// and the ends are trimmed. The result is empty when fewer than
/// [`MIN_SNIPPET_CHARS`] characters remain or when no letter is present,
/// so digit and punctuation runs like `"123 456 !!!"` are dropped.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() < MIN_SNIPPET_CHARS {
        return String::new();
    }

    if !collapsed.chars().any(char::is_alphabetic) {
        return String::new();
    }

    collapsed
}

/// Character length of a snippet after trimming
pub(crate) fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Hello \n\t  World  "), "Hello World");
        assert_eq!(normalize("Kup\u{a0}teraz"), "Kup teraz");
    }

    #[test]
    fn test_rejects_short_text() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ab  "), "");
        assert_eq!(normalize("abc"), "abc");
    }

    #[test]
    fn test_rejects_symbol_only_text() {
        assert_eq!(normalize("123 456 !!!"), "");
        assert_eq!(normalize("--- ### 2024"), "");
        assert_eq!(normalize("© 2024 Apple"), "© 2024 Apple");
    }

    #[test]
    fn test_keeps_non_latin_letters() {
        assert_eq!(normalize("Привет мир"), "Привет мир");
        assert_eq!(normalize("żółć"), "żółć");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,40}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn prop_output_has_no_double_spaces(raw in "[a-z \\t\\n]{0,40}") {
            let out = normalize(&raw);
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
