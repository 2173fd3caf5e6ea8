//! Process-level operations: where the launcher lives and what it turns into.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

pub trait ProcessHost {
    /// Path of the currently running executable, as reported by the OS.
    fn current_executable(&self) -> io::Result<PathBuf>;

    /// Absolute path with symlinks and `.`/`..` components resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Change the process working directory.
    fn change_dir(&self, path: &Path) -> io::Result<()>;

    /// Replace the current process with `interpreter script`.
    ///
    /// Only returns when the replacement failed.
    fn replace(&self, interpreter: &OsStr, script: &Path) -> io::Error;
}
