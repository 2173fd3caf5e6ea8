use std::cell::RefCell;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::ProcessHost;

/// A recorded call to `ProcessHost::replace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub cwd: Option<PathBuf>,
    pub interpreter: OsString,
    pub script: PathBuf,
}

/// Scriptable process host that records instead of acting.
///
/// `replace` always returns an error (a real one never returns on success);
/// inspect `replacement()` to see what would have been exec'd.
pub struct FakeProcessHost {
    executable: PathBuf,
    fail_current_exe: bool,
    fail_canonicalize: bool,
    fail_change_dir: bool,
    fail_replace: bool,
    cwd: RefCell<Option<PathBuf>>,
    replacement: RefCell<Option<Replacement>>,
}

impl FakeProcessHost {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            fail_current_exe: false,
            fail_canonicalize: false,
            fail_change_dir: false,
            fail_replace: false,
            cwd: RefCell::new(None),
            replacement: RefCell::new(None),
        }
    }

    pub fn failing_current_exe(mut self) -> Self {
        self.fail_current_exe = true;
        self
    }

    pub fn failing_canonicalize(mut self) -> Self {
        self.fail_canonicalize = true;
        self
    }

    pub fn failing_change_dir(mut self) -> Self {
        self.fail_change_dir = true;
        self
    }

    pub fn failing_replace(mut self) -> Self {
        self.fail_replace = true;
        self
    }

    pub fn cwd(&self) -> Option<PathBuf> {
        self.cwd.borrow().clone()
    }

    pub fn replacement(&self) -> Option<Replacement> {
        self.replacement.borrow().clone()
    }
}

impl ProcessHost for FakeProcessHost {
    fn current_executable(&self) -> io::Result<PathBuf> {
        if self.fail_current_exe {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(self.executable.clone())
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        if self.fail_canonicalize {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(path.to_path_buf())
    }

    fn change_dir(&self, path: &Path) -> io::Result<()> {
        if self.fail_change_dir {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        *self.cwd.borrow_mut() = Some(path.to_path_buf());
        Ok(())
    }

    fn replace(&self, interpreter: &OsStr, script: &Path) -> io::Error {
        if self.fail_replace {
            return io::Error::from(io::ErrorKind::NotFound);
        }
        *self.replacement.borrow_mut() = Some(Replacement {
            cwd: self.cwd(),
            interpreter: interpreter.to_os_string(),
            script: script.to_path_buf(),
        });
        io::Error::other("fake process replacement")
    }
}
