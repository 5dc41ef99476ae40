// src/bookmarks/document.rs
// =============================================================================
// This module parses the exported bookmarks file and rewrites it.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM-like tree (built on html5ever)
// - Supports CSS selectors for finding elements
// - Is lenient: malformed browser exports still parse, they never error
//
// The document is the single source of truth for a run. Every mutating
// operation here (purge, dead-link removal) clones the tree first and returns
// the clone, so the caller's retained document is never touched.
//
// Rust concepts:
// - Iterators and filter_map for walking selector matches
// - Ownership: &self methods that hand back a new owned document
// =============================================================================

use scraper::{Html, Selector};

// One extracted bookmark: the anchor's href and its visible text.
//
// Entries come out in document order and are NOT deduplicated - if the same
// URL was bookmarked twice, it gets probed twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    /// The href attribute, taken verbatim (no validation, no resolution)
    pub url: String,
    /// The anchor's text content; may be an empty string
    pub title: String,
}

// The parsed bookmark file.
//
// Wraps a scraper::Html tree. Cloning clones the whole tree, which is what
// the purge and rewrite operations rely on.
#[derive(Debug, Clone)]
pub struct BookmarkDocument {
    html: Html,
}

// Builds the selector for anchors that actually have an href.
// Selector::parse only fails on invalid CSS; "a[href]" is a constant and
// known to be valid, so unwrap here is fine.
fn anchor_selector() -> Selector {
    Selector::parse("a[href]").unwrap()
}

impl BookmarkDocument {
    /// Parses a bookmarks export. Never fails: html5ever recovers from
    /// malformed markup, so the worst case is a document with zero anchors.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every anchor with an href, in document order, duplicates included.
    pub fn entries(&self) -> Vec<BookmarkEntry> {
        let selector = anchor_selector();
        self.html
            .select(&selector)
            .filter_map(|anchor| {
                anchor.value().attr("href").map(|href| BookmarkEntry {
                    url: href.to_string(),
                    title: anchor.text().collect::<String>(),
                })
            })
            .collect()
    }

    /// Returns a copy of the document with every anchor whose href is not an
    /// absolute http:// or https:// URL removed, plus the number removed.
    ///
    /// Relative paths, javascript:, mailto:, ftp: and friends all go. The
    /// receiver is left untouched; callers keep it for the cleaned-output
    /// rewrite later in the run.
    pub fn purge_non_http(&self) -> (BookmarkDocument, usize) {
        let mut purged = self.clone();
        let selector = anchor_selector();

        // Collect node ids first: we can't detach while the selector
        // iterator is still borrowing the tree
        let doomed: Vec<_> = purged
            .html
            .select(&selector)
            .filter(|anchor| {
                let href = anchor.value().attr("href").unwrap_or("");
                !href.starts_with("http://") && !href.starts_with("https://")
            })
            .map(|anchor| anchor.id())
            .collect();

        let removed = doomed.len();
        for id in doomed {
            if let Some(mut node) = purged.html.tree.get_mut(id) {
                node.detach();
            }
        }

        (purged, removed)
    }

    /// Returns a copy of the document with dead-link anchors removed.
    ///
    /// For each URL in `dead_urls`, the FIRST remaining anchor whose href
    /// matches exactly is detached - one removal per lookup. The dead list
    /// carries one element per dead probe, so a URL bookmarked twice that
    /// probed dead twice appears here twice and both copies get removed.
    pub fn without_dead_links(&self, dead_urls: &[String]) -> BookmarkDocument {
        let mut cleaned = self.clone();
        let selector = anchor_selector();

        for url in dead_urls {
            let target = cleaned
                .html
                .select(&selector)
                .find(|anchor| anchor.value().attr("href") == Some(url.as_str()))
                .map(|anchor| anchor.id());

            if let Some(id) = target {
                if let Some(mut node) = cleaned.html.tree.get_mut(id) {
                    node.detach();
                }
            }
        }

        cleaned
    }

    /// Serializes the document back to HTML.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}
