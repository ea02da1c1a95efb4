//! Score extraction and link planning for trajectory files.
//!
//! A trajectory file records one comma-separated record per frame and
//! ends with the frame on which the episode finished. The third field
//! of that final record is the episode score, and it is the only part
//! of the file the ranking reads.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::tail;

/// A trajectory file paired with the score parsed from its final line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTrajectory {
    /// Score recorded on the file's final line.
    pub score: i64,
    /// Path of the trajectory file inside the source directory.
    pub path: PathBuf,
}

/// The pair of links planned for one rank position.
#[derive(Debug, PartialEq)]
pub struct RankedLink {
    /// Rank position, starting at 1 for the best score.
    pub rank: usize,
    /// Score that earned this position.
    pub score: i64,
    /// Link to create under the destination's `trajectories` directory.
    pub trajectory_link: PathBuf,
    /// Trajectory file the link points at.
    pub trajectory_target: PathBuf,
    /// Link to create under the destination's `screens` directory.
    pub screens_link: PathBuf,
    /// Screens directory the link points at.
    pub screens_target: PathBuf,
}

/// Parses the episode score from a trajectory's final line.
///
/// The score is the third comma-separated field, surrounding whitespace
/// ignored.
///
/// # Errors
///
/// Returns an error if the line has fewer than three fields or the
/// third field is not an integer.
pub fn parse_score(line: &str) -> Result<i64, String> {
    let field = line
        .split(',')
        .nth(2)
        .ok_or_else(|| format!("Line {line:?} has fewer than 3 comma-separated fields"))?;
    let field = field.trim();
    field
        .parse::<i64>()
        .map_err(|e| format!("Score field {field:?} is not an integer: {e}"))
}

/// Reads the score of every trajectory file in `source_dir`.
///
/// Dot-prefixed names are skipped. Any unreadable or malformed file
/// fails the whole collection, so callers never act on a partial view
/// of the directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or any file's
/// score cannot be read.
pub fn collect_scores(
    ctx: &ServiceContext,
    source_dir: &Path,
) -> Result<Vec<ScoredTrajectory>, String> {
    let names = ctx
        .fs
        .list_dir(source_dir)
        .map_err(|e| format!("Failed to list {}: {e}", source_dir.display()))?;

    let mut trajectories = Vec::new();
    for name in names {
        if name.starts_with('.') {
            continue;
        }
        let path = source_dir.join(&name);
        let mut reader = ctx
            .fs
            .open(&path)
            .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
        let line = tail::last_line(&mut reader)
            .map_err(|e| format!("Failed to read last line of {}: {e}", path.display()))?;
        let score = parse_score(&line)
            .map_err(|e| format!("Failed to parse score from {}: {e}", path.display()))?;
        trajectories.push(ScoredTrajectory { score, path });
    }
    Ok(trajectories)
}

/// Sorts trajectories best-first: descending score, then descending
/// path for equal scores.
pub fn sort_descending(trajectories: &mut [ScoredTrajectory]) {
    trajectories
        .sort_by(|a, b| (b.score, b.path.as_os_str()).cmp(&(a.score, a.path.as_os_str())));
}

/// Returns the identifier shared by a trajectory file and its screens
/// directory: the file name up to the first dot.
fn numeric_identifier(name: &str) -> &str {
    match name.find('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Returns the screens directory that sits beside a trajectory file's
/// parent: two levels up, then `screens`.
fn screens_dir(trajectory: &Path) -> PathBuf {
    trajectory
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
        .join("screens")
}

/// Plans the links for already-sorted trajectories.
///
/// Rank `n` gets `trajectories/n.txt` pointing at the trajectory file
/// and `screens/n` pointing at the matching screens directory.
///
/// # Errors
///
/// Returns an error if a trajectory path has no UTF-8 file name.
pub fn plan_links(
    trajectories: &[ScoredTrajectory],
    dest_dir: &Path,
) -> Result<Vec<RankedLink>, String> {
    let mut links = Vec::new();
    for (idx, trajectory) in trajectories.iter().enumerate() {
        let rank = idx + 1;
        let name = trajectory
            .path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| {
                format!("Trajectory path {} has no usable file name", trajectory.path.display())
            })?;
        links.push(RankedLink {
            rank,
            score: trajectory.score,
            trajectory_link: dest_dir.join("trajectories").join(format!("{rank}.txt")),
            trajectory_target: trajectory.path.clone(),
            screens_link: dest_dir.join("screens").join(rank.to_string()),
            screens_target: screens_dir(&trajectory.path).join(numeric_identifier(name)),
        });
    }
    Ok(links)
}

/// Creates the destination directory tree: the root plus its
/// `trajectories` and `screens` subdirectories.
///
/// Directories that already exist are left in place.
///
/// # Errors
///
/// Returns an error if any directory cannot be created.
pub fn create_structure(ctx: &ServiceContext, dest_dir: &Path) -> Result<(), String> {
    for dir in
        [dest_dir.to_path_buf(), dest_dir.join("trajectories"), dest_dir.join("screens")]
    {
        ctx.fs
            .create_dir_all(&dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
    }
    Ok(())
}

/// Creates the planned links, best rank first.
///
/// Each rank's trajectory link is created before its screens link. The
/// first failure stops the run.
///
/// # Errors
///
/// Returns an error if any link cannot be created.
pub fn create_links(ctx: &ServiceContext, links: &[RankedLink]) -> Result<(), String> {
    for link in links {
        ctx.fs.symlink(&link.trajectory_target, &link.trajectory_link).map_err(|e| {
            format!("Failed to create link {}: {e}", link.trajectory_link.display())
        })?;
        ctx.fs.symlink(&link.screens_target, &link.screens_link).map_err(|e| {
            format!("Failed to create link {}: {e}", link.screens_link.display())
        })?;
    }
    Ok(())
}

/// Formats planned links as a human-readable report.
#[must_use]
pub fn format_plan(links: &[RankedLink]) -> String {
    if links.is_empty() {
        return "No trajectories to rank.".to_string();
    }

    let mut lines = Vec::new();
    for link in links {
        lines.push(format!(
            "  TRAJECTORY {}.txt (score {}) -> {}",
            link.rank,
            link.score,
            link.trajectory_target.display()
        ));
        lines.push(format!("  SCREENS {} -> {}", link.rank, link.screens_target.display()));
    }
    lines.join("\n")
}
