//! Path arithmetic over the app-bundle layout and the project tree around it.

use std::path::{Path, PathBuf};

/// Strip `depth` trailing components from `executable`.
///
/// For `.../Repo/FixOnce.app/Contents/MacOS/FixOnce` and a depth of 4 this
/// yields `.../Repo`. Stripping stops at the filesystem root.
pub fn bundle_parent(executable: &Path, depth: usize) -> PathBuf {
    let mut dir = executable;
    for _ in 0..depth {
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    dir.to_path_buf()
}

/// A directory holding the marker file, and the marker's full path inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub dir: PathBuf,
    pub script: PathBuf,
}

/// Walk from `start` towards the filesystem root looking for `marker`.
///
/// At most `max_levels` directories are tested, `start` itself being the
/// first. Returns `None` when the bound or the root is reached first.
pub fn find_project_root<F>(
    start: &Path,
    marker: &Path,
    max_levels: usize,
    is_readable: F,
) -> Option<ProjectRoot>
where
    F: Fn(&Path) -> bool,
{
    let mut dir = start;
    for _ in 0..max_levels {
        let script = dir.join(marker);
        if is_readable(&script) {
            return Some(ProjectRoot { dir: dir.to_path_buf(), script });
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    None
}
