//! Most-recent selection over a directory snapshot.
//!
//! Expressed as a max-by-key fold rather than a comparator sort so the
//! sentinel exclusion and the tie policy stay explicit and testable.

use std::path::Path;

use gorun_shared_kernel::FileMeta;

use crate::error::{EngineError, Result};

/// Pick the entry with the most recent modification time, skipping any
/// name in `excluded`.
///
/// Ties keep the earlier entry in listing order. Entries without a
/// readable mtime rank below everything that has one.
///
/// # Errors
///
/// `EmptyDirectory` when nothing remains after exclusion; `dir` only
/// labels the error message.
pub fn select_most_recent<'a>(
    entries: &'a [FileMeta],
    excluded: &[String],
    dir: &Path,
) -> Result<&'a FileMeta> {
    entries
        .iter()
        .filter(|meta| !excluded.iter().any(|name| name == meta.name.as_str()))
        .reduce(|best, candidate| {
            if candidate.mtime > best.mtime {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| EngineError::EmptyDirectory {
            dir: dir.to_path_buf(),
        })
}
