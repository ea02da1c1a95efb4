//! Ranking manifest: YAML record of a run, written beside the links.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::rank::RankedLink;

/// File name of the manifest written into the destination directory.
pub const MANIFEST_FILE: &str = "ranking.yaml";

/// Record of one ranked trajectory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    /// Rank position, 1 is best.
    pub rank: usize,
    /// Score parsed from the trajectory's final line.
    pub score: i64,
    /// Trajectory file the rank's `trajectories` link points at.
    pub trajectory: PathBuf,
    /// Screens directory the rank's `screens` link points at.
    pub screens: PathBuf,
}

/// Snapshot of a whole ranking run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingManifest {
    /// Timestamp when the ranking ran.
    pub generated_at: DateTime<Utc>,
    /// Source directory the trajectories were read from.
    pub source: PathBuf,
    /// Entries in rank order.
    pub entries: Vec<ManifestEntry>,
}

/// Writes the manifest for `links` into `dest_dir` and returns its path.
///
/// # Errors
///
/// Returns an error if YAML serialization or the write fails.
pub fn write(
    ctx: &ServiceContext,
    dest_dir: &Path,
    source_dir: &Path,
    links: &[RankedLink],
) -> Result<PathBuf, String> {
    let manifest = RankingManifest {
        generated_at: ctx.clock.now(),
        source: source_dir.to_path_buf(),
        entries: links
            .iter()
            .map(|link| ManifestEntry {
                rank: link.rank,
                score: link.score,
                trajectory: link.trajectory_target.clone(),
                screens: link.screens_target.clone(),
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&manifest)
        .map_err(|e| format!("failed to serialize manifest: {e}"))?;
    let output = dest_dir.join(MANIFEST_FILE);
    ctx.fs
        .write(&output, &yaml)
        .map_err(|e| format!("failed to write manifest to {}: {e}", output.display()))?;
    Ok(output)
}
