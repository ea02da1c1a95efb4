//! Core library entry for the `trajrank` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod manifest;
pub mod ports;
pub mod rank;
pub mod tail;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the ranking run fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
