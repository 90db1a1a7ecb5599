//! Command-line argument parsing and handling.

use clap::Parser;

use crate::state::SearchFilters;

/// docsea - a fast, friendly TUI for searching and browsing healthcare providers
#[derive(Parser, Debug)]
#[command(name = "docsea")]
#[command(version)]
#[command(
    about = "A fast, friendly TUI for searching and browsing a healthcare provider directory",
    long_about = None
)]
pub struct Args {
    /// Search providers by name from the command line
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Filter providers by specialization from the command line
    #[arg(short = 's', long)]
    pub specialization: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Override the directory API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the cross-session provider cache as JSON and exit
    #[arg(long)]
    pub print_cache: bool,
}

impl Args {
    /// Filters carried by the invocation, feeding mount-time resolution.
    #[must_use]
    pub fn explicit_filters(&self) -> SearchFilters {
        SearchFilters {
            query_text: self.query.clone().unwrap_or_default(),
            specialization: self.specialization.clone().unwrap_or_default(),
        }
    }
}

/// Print the cached provider set as JSON, for `--print-cache`.
pub fn print_cache() {
    use crate::cache::{CrossSessionCache, JsonFileCache};
    let cache = JsonFileCache::new(crate::theme::provider_cache_path());
    match cache.load() {
        Some(records) => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to render cache: {e}"),
        },
        None => eprintln!("no cached providers"),
    }
}
