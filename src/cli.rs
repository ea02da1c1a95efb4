//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `trajrank`.
#[derive(Debug, Parser)]
#[command(name = "trajrank", version, about = "Rank recorded trajectories by final score")]
pub struct Cli {
    /// Directory containing the trajectory files to rank.
    pub source_dir: PathBuf,
    /// Destination root for the ranked link tree.
    pub dest_dir: PathBuf,
    /// Plan the ranking and print it without creating anything.
    #[arg(long)]
    pub dry_run: bool,
}
