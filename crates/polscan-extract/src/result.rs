//! Scan result types

use serde::{Deserialize, Serialize};

/// Visible text of one DOM element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Tag the text was collected from
    pub tag_name: String,
    /// Normalized text
    pub raw_text: String,
}

impl Snippet {
    pub fn new(tag_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A snippet retained in the report, with its detected language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSnippet {
    pub tag_name: String,
    /// Never "pl" and never empty
    pub language_code: String,
    pub text: String,
}

/// Outcome of scanning one page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Page that was scanned
    pub source: String,

    /// Snippets collected from the page
    pub total_snippets: usize,

    /// Snippets classified as Polish
    pub polish_filtered: usize,

    /// Snippets whose language could not be determined
    pub unclassified: usize,

    /// Non-Polish snippets, in collection order
    pub entries: Vec<ClassifiedSnippet>,
}

impl ScanReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Number of non-Polish snippets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snippets left out of the report for any reason
    pub fn excluded(&self) -> usize {
        self.total_snippets.saturating_sub(self.entries.len())
    }

    /// Render the HTML report
    pub fn to_html(&self) -> String {
        crate::report::render(&self.entries)
    }
}
