use std::path::Path;

/// Port for side-effect-free filesystem checks.
pub trait FileProbe {
    /// Whether `path` is an existing file the current user can read.
    fn is_readable_file(&self, path: &Path) -> bool;

    /// Whether `path` is an existing file the current user can execute.
    fn is_executable(&self, path: &Path) -> bool;
}
