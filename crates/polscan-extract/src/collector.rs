//! Visible text collection from HTML documents

use crate::config::ScanConfig;
use crate::result::Snippet;
use polscan_detect::normalize;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Collects normalized text snippets from content-bearing elements.
///
/// Output order is part of the contract: allow-listed tags in list order,
/// then document order within each tag.
pub struct TextCollector {
    text_tags: Vec<(String, Selector)>,
    ignored_tags: Vec<String>,
}

impl Default for TextCollector {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl TextCollector {
    pub fn new(config: &ScanConfig) -> Self {
        let text_tags = config
            .text_tags
            .iter()
            .filter_map(|tag| match Selector::parse(tag) {
                Ok(selector) => Some((tag.clone(), selector)),
                Err(e) => {
                    warn!(tag = %tag, error = ?e, "skipping tag that is not a valid selector");
                    None
                }
            })
            .collect();

        Self {
            text_tags,
            ignored_tags: config
                .ignored_tags
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Parse `html` and collect its snippets
    pub fn collect(&self, html: &str) -> Vec<Snippet> {
        let mut document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(errors = document.errors.len(), "recovered from malformed markup");
        }
        self.strip_invisible(&mut document);
        self.collect_from(&document)
    }

    /// Remove ignored subtrees and comment nodes
    fn strip_invisible(&self, document: &mut Html) {
        let doomed: Vec<_> = document
            .tree
            .nodes()
            .filter(|node| {
                let value = node.value();
                value.is_comment()
                    || value
                        .as_element()
                        .map(|el| self.ignored_tags.iter().any(|t| t == el.name()))
                        .unwrap_or(false)
            })
            .map(|node| node.id())
            .collect();

        for id in doomed {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }

    /// Detached subtrees stay in the arena, so selection starts from the root
    /// element rather than from the whole document.
    fn collect_from(&self, document: &Html) -> Vec<Snippet> {
        let root = document.root_element();
        let mut snippets = Vec::new();

        for (tag, selector) in &self.text_tags {
            for element in root.select(selector) {
                let text = normalize(&flatten_text(&element));
                if !text.is_empty() {
                    snippets.push(Snippet::new(tag.as_str(), text));
                }
            }
        }

        snippets
    }
}

/// All descendant text of an element, each piece trimmed and space-joined
fn flatten_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
