//! Derived-name rules for the build pipeline. Pure string work, no I/O.

use std::path::{Path, PathBuf};

use crate::config::ToolchainConfig;

/// The three paths one build touches, derived up front from the source name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Normalized source path (suffix appended when missing).
    pub source: PathBuf,
    /// Final executable: full source name plus the artifact suffix.
    pub artifact: PathBuf,
    /// Compiler output consumed by the linker, deleted after a rebuild.
    pub intermediate: PathBuf,
}

impl BuildPlan {
    pub fn for_source(config: &ToolchainConfig) -> Self {
        let source = ensure_suffix(&config.source, &config.source_suffix);
        let artifact = append_suffix(&source, &config.artifact_suffix);
        let intermediate = append_suffix(&strip_last_suffix(&source), &config.intermediate_suffix);
        Self {
            source,
            artifact,
            intermediate,
        }
    }
}

/// Appends `.suffix` unless the name already ends with it. Idempotent:
/// `foo` and `foo.go` both normalize to `foo.go`.
pub fn ensure_suffix(path: &Path, suffix: &str) -> PathBuf {
    let name = path.to_string_lossy();
    let dotted = format!(".{suffix}");
    if name.ends_with(&dotted) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{name}{dotted}"))
    }
}

/// Appends `.suffix` to the full name, never replacing an existing one:
/// `foo.go` + `exe` is `foo.go.exe`.
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}.{suffix}", path.to_string_lossy()))
}

/// Drops everything from the last dot onward: `a.b.go` becomes `a.b`.
fn strip_last_suffix(path: &Path) -> PathBuf {
    let name = path.to_string_lossy();
    match name.rsplit_once('.') {
        Some((stem, _)) => PathBuf::from(stem),
        None => path.to_path_buf(),
    }
}
