// crates/shared-kernel/src/value_objects/file_meta.rs
use serde::{Deserialize, Serialize};

use super::{FileName, FilePath, ModificationTime};

/// Minimal file metadata captured during enumeration.
///
/// Immutable snapshot at stat time; nothing here is refreshed if the
/// underlying entry changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub path: FilePath,
    pub name: FileName,
    /// `None` when the platform cannot report a modification time.
    pub mtime: Option<ModificationTime>,
}

impl FileMeta {
    pub fn new(path: FilePath, name: FileName, mtime: Option<ModificationTime>) -> Self {
        Self { path, name, mtime }
    }
}
