// src/checker/http.rs
// =============================================================================
// This module probes bookmarks over HTTP and classifies the results.
//
// Key functionality:
// - One GET request per bookmark, strictly sequential, in document order
// - Per-request timeout; redirects are followed by reqwest, so we only ever
//   classify the final response's status code
// - Three-way classification: 200 = live, 404 = dead, anything else = other
// - Every transport-level failure (timeout, DNS, refused connection, TLS,
//   malformed URL) folds into the dead bucket; the cause is only visible in
//   the verbose log line
// - No retries: each bookmark is probed exactly once per run
//
// Rust concepts:
// - async/await: The GETs are awaited one at a time, never in parallel
// - Enums: To represent the classification outcome
// - match: To route responses and errors into the right bucket
// =============================================================================

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::Client;
use std::time::Duration;

use crate::bookmarks::BookmarkEntry;

// The classification of one probed bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Final response was 200 OK
    Live,
    /// Final response was 404, or the request failed at the transport level
    Dead,
    /// Final response carried any other status code (kept for the archive)
    Other(u16),
}

// A bookmark that answered with a status we neither keep nor bury
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherStatusEntry {
    pub entry: BookmarkEntry,
    pub status: u16,
}

// The three result buckets of a full probe run.
//
// Together the buckets partition the input: every entry lands in exactly one,
// and relative order inside each bucket matches the input order.
#[derive(Debug, Default)]
pub struct ClassificationBatch {
    pub live: Vec<BookmarkEntry>,
    pub dead: Vec<BookmarkEntry>,
    pub other: Vec<OtherStatusEntry>,
}

// Maps a final HTTP status code onto a bucket.
//
// Exactly 200 counts as live - a 204 or a 206 is unusual enough for a
// bookmark that it goes to the other-status archive for a human to look at.
pub fn classify_status(code: u16) -> ProbeStatus {
    match code {
        200 => ProbeStatus::Live,
        404 => ProbeStatus::Dead,
        other => ProbeStatus::Other(other),
    }
}

// Probes every bookmark, one GET at a time, and partitions the results.
//
// Parameters:
//   entries: the extracted bookmarks, in document order
//   timeout: per-request timeout (one value for the whole run)
//   verbose: print per-link classification lines instead of bare progress
//
// The only error this returns is a failure to build the HTTP client;
// everything that goes wrong with an individual link degrades into the
// dead bucket instead of failing the run.
pub async fn check_links(
    entries: Vec<BookmarkEntry>,
    timeout: Duration,
    verbose: bool,
) -> Result<ClassificationBatch> {
    // One client for the whole run (connection pooling), with the
    // per-request timeout baked in
    let client = Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .context("failed to build HTTP client")?;

    let total = entries.len();
    let mut batch = ClassificationBatch::default();

    for (idx, entry) in entries.into_iter().enumerate() {
        let idx = idx + 1;

        if verbose {
            println!(
                "{} {} \n {}",
                format!("[CHECKING {}/{}]:", idx, total).yellow(),
                entry.title.bright_magenta(),
                entry.url
            );
        } else {
            println!("Checking {}/{} bookmarks...", idx, total);
        }

        // The await here is what keeps the run sequential: nothing else is
        // in flight while this GET runs
        match client.get(&entry.url).send().await {
            Ok(response) => match classify_status(response.status().as_u16()) {
                ProbeStatus::Live => {
                    if verbose {
                        println!("{} {}", "[OK!]:".green(), entry.title.bright_magenta());
                    }
                    batch.live.push(entry);
                }
                ProbeStatus::Dead => {
                    if verbose {
                        println!("{} {}", "[DEAD LINK]:".red(), entry.title.bright_magenta());
                    }
                    batch.dead.push(entry);
                }
                ProbeStatus::Other(status) => {
                    if verbose {
                        println!(
                            "{} {}",
                            format!("[OTHER STATUS {}]:", status).red(),
                            entry.title.bright_magenta()
                        );
                    }
                    batch.other.push(OtherStatusEntry { entry, status });
                }
            },
            Err(err) => {
                // Timeout, DNS, refused, TLS, bad URL... the cause only
                // shows up here; the entry itself just counts as dead
                if verbose {
                    println!(
                        "{} {} \n ({}). \nError: {}",
                        "Error occurred while checking link:".red(),
                        entry.title.bright_magenta(),
                        entry.url,
                        err
                    );
                }
                batch.dead.push(entry);
            }
        }
    }

    Ok(batch)
}
