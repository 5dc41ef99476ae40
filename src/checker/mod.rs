// src/checker/mod.rs
// =============================================================================
// This module contains the link probing and classification logic.
//
// Submodules:
// - http: Makes one HTTP GET per bookmark and sorts the results into the
//   three buckets (live / dead / other status)
//
// This file (mod.rs) is the module root - it re-exports the public API that
// the rest of the application uses.
// =============================================================================

mod http;

// Re-export public items from submodules
// This lets callers write `checker::check_links()` instead of
// `checker::http::check_links()`
pub use http::{check_links, ClassificationBatch, OtherStatusEntry, ProbeStatus};
