//! Thin stat/listing layer. Every call is a fresh snapshot; nothing is
//! cached across invocations.

use std::path::Path;

use gorun_shared_kernel::{FileMeta, FileName, FilePath, ModificationTime};

use crate::error::{EngineError, Result};

/// Stat a single path into an immutable metadata snapshot.
///
/// # Errors
///
/// Fails with `Stat` carrying the underlying OS error verbatim, including
/// the not-found case.
pub fn stat_meta(path: &Path) -> Result<FileMeta> {
    let meta = std::fs::metadata(path).map_err(|e| EngineError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mtime = meta.modified().ok().map(ModificationTime::from);
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FileMeta::new(
        FilePath::from(path),
        FileName::from(name),
        mtime,
    ))
}

/// Modification time of `path`, or `None` when the entry does not exist.
///
/// # Errors
///
/// Any stat failure other than not-found is surfaced as `Stat`.
pub fn mtime_if_exists(path: &Path) -> Result<Option<ModificationTime>> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.modified().ok().map(ModificationTime::from)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EngineError::Stat {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Snapshot one directory into a listing of metadata entries.
///
/// Entries whose metadata cannot be read (deleted mid-listing) are kept
/// with `mtime: None` rather than aborting the listing.
pub fn list_dir(dir: &Path) -> Result<Vec<FileMeta>> {
    let read = std::fs::read_dir(dir).map_err(|e| EngineError::ReadDir {
        dir: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| EngineError::ReadDir {
            dir: dir.to_path_buf(),
            source: e,
        })?;
        let mtime = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(ModificationTime::from);
        entries.push(FileMeta::new(
            FilePath::from(entry.path()),
            FileName::from(entry.file_name().to_string_lossy().into_owned()),
            mtime,
        ));
    }
    Ok(entries)
}
