use std::path::Path;

use crate::ports::FileProbe;

/// `FileProbe` backed by the real filesystem.
///
/// On Unix both checks go through `access(2)`, so they answer for the real
/// user and group of this process rather than for whoever owns the file.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileProbe;

#[cfg(unix)]
fn accessible(path: &Path, mode: nix::unistd::AccessFlags) -> bool {
    path.is_file() && nix::unistd::access(path, mode).is_ok()
}

impl FileProbe for LocalFileProbe {
    #[cfg(unix)]
    fn is_readable_file(&self, path: &Path) -> bool {
        accessible(path, nix::unistd::AccessFlags::R_OK)
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        accessible(path, nix::unistd::AccessFlags::X_OK)
    }

    #[cfg(not(unix))]
    fn is_readable_file(&self, path: &Path) -> bool {
        path.is_file() && std::fs::File::open(path).is_ok()
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
    }
}
