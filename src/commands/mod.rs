//! Command dispatch and handlers.

pub mod rank;

use crate::cli::Cli;
use crate::context::ServiceContext;

/// Dispatches parsed arguments to the ranking command.
///
/// # Errors
///
/// Returns an error string if the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    rank::run(&ctx, &cli.source_dir, &cli.dest_dir, cli.dry_run)
}
