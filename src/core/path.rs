use std::path::{Path, PathBuf};

/// Number of directories between the repository root and the launcher's
/// own parent directory (`<root>/target/release/homelab`).
pub const REPO_ROOT_DEPTH: usize = 2;

pub fn resolve_path(base_dir: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Ancestor `REPO_ROOT_DEPTH` levels above the parent of `file`.
///
/// Pure path arithmetic: nothing is checked on disk. Returns `None` when
/// `file` has too few components to ascend that far.
pub fn repo_root_from(file: &Path) -> Option<PathBuf> {
    file.ancestors()
        .nth(REPO_ROOT_DEPTH + 1)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
