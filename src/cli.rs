//! Command-line interface for star-match.

use std::path::PathBuf;

use clap::Parser;

/// Match the stars before the clock runs out
#[derive(Parser, Debug)]
#[command(name = "star-match")]
#[command(about = "A terminal star-matching number puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the session RNG. Random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (filtered by RUST_LOG, default info)
    #[arg(long, default_value = "star-match.log")]
    pub log_file: PathBuf,
}
