//! The staleness decision: rebuild iff the artifact is missing or strictly
//! older than the source.

use std::path::Path;

use gorun_shared_kernel::ModificationTime;

use crate::error::Result;
use crate::filesystem;

/// Pure decision over two pre-fetched timestamps.
///
/// Equality means up to date: a source touched in the same instant as its
/// artifact does NOT trigger a rebuild.
#[must_use]
pub fn is_stale(source: ModificationTime, artifact: Option<ModificationTime>) -> bool {
    match artifact {
        None => true,
        Some(artifact) => source > artifact,
    }
}

/// Stat both paths and apply [`is_stale`].
///
/// The source is assumed to exist (checked upstream); a stat failure on it
/// here is fatal. Artifact absence simply means rebuild.
///
/// # Errors
///
/// `Stat` with the verbatim OS error when either stat fails for a reason
/// other than the artifact not existing.
pub fn needs_rebuild(source: &Path, artifact: &Path) -> Result<bool> {
    let source_meta = filesystem::stat_meta(source)?;
    let Some(source_mtime) = source_meta.mtime else {
        // No readable mtime on the source: rebuild rather than guess.
        return Ok(true);
    };
    let artifact_mtime = filesystem::mtime_if_exists(artifact)?;
    Ok(is_stale(source_mtime, artifact_mtime))
}
