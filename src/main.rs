// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read and parse the bookmarks file
// 3. Optionally purge non-HTTP(S) bookmarks from the source file
//    (byte-for-byte backup first - a failed backup aborts the run)
// 4. Probe every bookmark sequentially and partition the results
// 5. Archive dead and other-status links, write the cleaned copy
// 6. Print the three-line summary
//
// Only I/O that prevents reading the input or writing the mandatory backup
// is fatal; per-link failures degrade into the dead bucket inside the
// checker and never abort a run.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod archive; // src/archive.rs - dead/other archive documents
mod bookmarks; // src/bookmarks/ - document parsing, purge, rewrite
mod checker; // src/checker/ - sequential HTTP probing
mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::fs;
use std::time::Duration;

use bookmarks::BookmarkDocument;
use cli::Cli;

// Fixed output name for the cleaned bookmark file (full overwrite per run)
const CLEANED_FILE: &str = "cleaned_bookmarks.html";

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Fatal condition (unreadable input, failed backup, ...)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // One timeout for the whole run; smart mode draws it randomly
    let timeout = Duration::from_secs(cli.timeout_secs());

    let raw = fs::read_to_string(&cli.filename)
        .with_context(|| format!("failed to read bookmarks file: {}", cli.filename))?;
    let original = BookmarkDocument::parse(&raw);

    // In purge mode the filtered document supersedes the original for
    // probing, and the source file itself is rewritten in place. The backup
    // copy MUST land before the destructive write.
    let probe_doc = if cli.purge {
        let (purged, removed) = original.purge_non_http();
        let backup = format!("{}.bak", cli.filename);
        fs::copy(&cli.filename, &backup)
            .with_context(|| format!("failed to write backup file: {}", backup))?;
        fs::write(&cli.filename, purged.to_html())
            .with_context(|| format!("failed to rewrite bookmarks file: {}", cli.filename))?;
        println!("Purged {} non-HTTP link(s); backup saved to {}", removed, backup);
        purged
    } else {
        original.clone()
    };

    let entries = probe_doc.entries();
    let batch = checker::check_links(entries, timeout, cli.verbose).await?;

    if !cli.no_archive {
        archive::write_dead_links(&batch.dead)?;
        archive::write_other_status(&batch.other)?;
    }

    // The cleaned copy is derived from the pre-purge document; one element
    // per dead probe, so duplicate dead bookmarks each remove one anchor
    let dead_urls: Vec<String> = batch.dead.iter().map(|e| e.url.clone()).collect();
    let cleaned = original.without_dead_links(&dead_urls);
    fs::write(CLEANED_FILE, cleaned.to_html())
        .with_context(|| format!("failed to write {}", CLEANED_FILE))?;

    println!("{} live links kept.", batch.live.len());
    println!("{} dead links archived.", batch.dead.len());
    println!("{} links with other status codes.", batch.other.len());

    Ok(())
}
