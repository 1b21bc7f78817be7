//! The move action: collision check first, then a single atomic rename.

use std::path::{Path, PathBuf};

use gorun_shared_kernel::path::logical_absolute;
use gorun_shared_kernel::FileMeta;

use crate::error::{EngineError, Result};

/// What a successful move looked like, for the confirmation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Absolute path the entry was moved from.
    pub source: PathBuf,
    /// Base name now present in the destination directory.
    pub name: String,
}

impl MoveReport {
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("moved {} to ./{}", self.source.display(), self.name)
    }
}

/// Rename `entry` into `dest_dir`, refusing to overwrite.
///
/// # Errors
///
/// `DestinationCollision` when a same-named file already exists in the
/// destination (the source is left untouched); `Rename` when the rename
/// itself fails.
pub fn move_entry(entry: &FileMeta, dest_dir: &Path) -> Result<MoveReport> {
    let name = entry.name.as_str();
    let target = dest_dir.join(name);
    if target.exists() {
        return Err(EngineError::DestinationCollision {
            name: name.to_string(),
        });
    }

    let source = logical_absolute(entry.path.as_path());
    std::fs::rename(&source, &target).map_err(|e| EngineError::Rename {
        from: source.clone(),
        to: target,
        source: e,
    })?;

    Ok(MoveReport {
        source,
        name: name.to_string(),
    })
}
