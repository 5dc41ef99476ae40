// src/bookmarks/mod.rs
// =============================================================================
// This module owns everything about the bookmark file itself.
//
// Submodules:
// - document: Parses the exported HTML, extracts entries, and produces the
//   purged / cleaned variants of the document
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application use.
// =============================================================================

mod document;

// Re-export public items from submodules
// This lets users write `bookmarks::BookmarkDocument` instead of
// `bookmarks::document::BookmarkDocument`
pub use document::{BookmarkDocument, BookmarkEntry};
