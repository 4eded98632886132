use std::path::{Path, PathBuf};

use git2::Repository;

/// Root of the git repository enclosing `start`
///
/// Returns `None` outside a repository and for bare repositories, which have
/// no working directory to color.
pub fn discover(start: &Path) -> Option<PathBuf> {
    match Repository::discover(start) {
        Ok(repo) => repo.workdir().map(Path::to_path_buf),
        Err(e) => {
            tracing::debug!(start = %start.display(), "no workspace found: {}", e);
            None
        }
    }
}

/// Pick the workspace root: an explicit directory wins over discovery
///
/// An explicit path that is not an existing directory means there is no
/// workspace at all.
pub fn resolve(explicit: Option<&Path>, start: &Path) -> Option<PathBuf> {
    match explicit {
        Some(dir) if dir.is_dir() => Some(dir.to_path_buf()),
        Some(dir) => {
            tracing::warn!(path = %dir.display(), "workspace is not a directory");
            None
        }
        None => discover(start),
    }
}
