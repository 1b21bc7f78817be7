use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Prefix a bare file name with `./` so it is launched by path, never
/// resolved through the lookup path.
pub fn explicit_invocation(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match path.components().next() {
        Some(Component::CurDir | Component::ParentDir) | None => path.to_path_buf(),
        _ => Path::new(".").join(path),
    }
}
