// src/archive.rs
// =============================================================================
// This module writes the two archive documents at the end of a run:
//
// - dead_links.html: one anchor per dead bookmark, in probe order
// - other_status.html: one anchor per ambiguous bookmark, with the HTTP
//   status code carried as a data-status attribute
//
// Both files are full overwrites with fixed names - a run replaces whatever
// a previous run left behind, there is no appending or merging.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;

use crate::bookmarks::BookmarkEntry;
use crate::checker::OtherStatusEntry;

pub const DEAD_LINKS_FILE: &str = "dead_links.html";
pub const OTHER_STATUS_FILE: &str = "other_status.html";

/// Writes the dead-links archive into the working directory.
pub fn write_dead_links(entries: &[BookmarkEntry]) -> Result<()> {
    fs::write(DEAD_LINKS_FILE, render_dead_links(entries))
        .with_context(|| format!("failed to write {}", DEAD_LINKS_FILE))
}

/// Writes the other-status archive into the working directory.
pub fn write_other_status(entries: &[OtherStatusEntry]) -> Result<()> {
    fs::write(OTHER_STATUS_FILE, render_other_status(entries))
        .with_context(|| format!("failed to write {}", OTHER_STATUS_FILE))
}

fn render_dead_links(entries: &[BookmarkEntry]) -> String {
    let mut doc = document_open("Dead bookmarks");
    for entry in entries {
        doc.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            escape(&entry.url),
            escape(&entry.title)
        ));
    }
    doc.push_str(DOCUMENT_CLOSE);
    doc
}

fn render_other_status(entries: &[OtherStatusEntry]) -> String {
    let mut doc = document_open("Bookmarks with other status codes");
    for OtherStatusEntry { entry, status } in entries {
        doc.push_str(&format!(
            "<a href=\"{}\" data-status=\"{}\">{}</a>\n",
            escape(&entry.url),
            status,
            escape(&entry.title)
        ));
    }
    doc.push_str(DOCUMENT_CLOSE);
    doc
}

const DOCUMENT_CLOSE: &str = "</body>\n</html>\n";

fn document_open(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n",
        escape(title)
    )
}

// URLs and titles come straight out of someone else's bookmark file, so
// anything markup-significant has to be escaped before it lands in ours
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
