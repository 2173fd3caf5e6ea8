use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::ProcessHost;

/// `ProcessHost` for the running process.
#[derive(Debug, Clone, Copy)]
pub struct OsProcessHost;

impl ProcessHost for OsProcessHost {
    fn current_executable(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn change_dir(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }

    #[cfg(unix)]
    fn replace(&self, interpreter: &OsStr, script: &Path) -> io::Error {
        use std::os::unix::process::CommandExt;

        // `exec` searches PATH for unqualified names, like execvp.
        Command::new(interpreter).arg(script).exec()
    }

    #[cfg(not(unix))]
    fn replace(&self, interpreter: &OsStr, script: &Path) -> io::Error {
        // No exec on this platform: run to completion and hand over the status.
        match Command::new(interpreter).arg(script).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(err) => err,
        }
    }
}
