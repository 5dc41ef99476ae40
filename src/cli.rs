// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// pulsecheck is a single-command tool, so unlike multi-command CLIs there is
// no Subcommand enum here - every option is a flag on one Parser struct.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate parsing code for our types
// =============================================================================

use clap::Parser;
use rand::Rng;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "pulsecheck",
    version = "0.1.0",
    about = "Check the health of your bookmarks",
    long_about = "pulsecheck scans an exported browser-bookmarks HTML file, probes every link \
                  over HTTP, archives the dead and ambiguous ones, and writes a cleaned copy \
                  of the bookmark file with the dead links removed."
)]
pub struct Cli {
    /// Path to the bookmarks HTML file
    #[arg(long, default_value = "bookmarks.html")]
    pub filename: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Randomize the timeout to avoid spam flags
    ///
    /// Overrides --timeout with one random value in [5,10] seconds,
    /// drawn once per run and applied to every request
    #[arg(long)]
    pub smart_mode: bool,

    /// Enable verbose logging (per-link classification lines)
    #[arg(long)]
    pub verbose: bool,

    /// Disable archiving of dead and other-status links
    #[arg(long)]
    pub no_archive: bool,

    /// Remove non-HTTP(S) bookmarks from the source file before checking
    ///
    /// Writes a byte-for-byte <filename>.bak backup first, then overwrites
    /// the source file with the filtered result
    #[arg(long)]
    pub purge: bool,
}

impl Cli {
    /// The per-request timeout for this run, in seconds.
    ///
    /// Smart mode draws one random integer in [5,10] per run; the same value
    /// is applied to every request in that run. Otherwise the fixed
    /// --timeout value is used.
    pub fn timeout_secs(&self) -> u64 {
        if self.smart_mode {
            rand::rng().random_range(5..=10)
        } else {
            self.timeout
        }
    }
}
