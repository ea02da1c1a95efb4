//! The ranking command: score, sort, link, record.

use std::path::Path;

use crate::context::ServiceContext;
use crate::manifest;
use crate::rank;

/// Executes a ranking run from `source_dir` into `dest_dir`.
///
/// Every score is collected and the whole plan built before anything
/// is created, so a malformed source directory leaves the destination
/// untouched. With `dry_run` the plan is printed and nothing changes.
///
/// # Errors
///
/// Returns an error string if scores cannot be collected or the
/// destination cannot be built.
pub fn run(
    ctx: &ServiceContext,
    source_dir: &Path,
    dest_dir: &Path,
    dry_run: bool,
) -> Result<(), String> {
    let mut trajectories = rank::collect_scores(ctx, source_dir)?;
    rank::sort_descending(&mut trajectories);
    let links = rank::plan_links(&trajectories, dest_dir)?;

    if dry_run {
        println!("Dry run — would create:");
        println!("{}", rank::format_plan(&links));
        return Ok(());
    }

    rank::create_structure(ctx, dest_dir)?;
    rank::create_links(ctx, &links)?;
    let manifest_path = manifest::write(ctx, dest_dir, source_dir, &links)?;

    println!("Ranking complete:");
    println!("{}", rank::format_plan(&links));
    println!("Manifest written to {}", manifest_path.display());
    Ok(())
}
