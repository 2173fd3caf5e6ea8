use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::ports::FileProbe;

/// In-memory filesystem view: only the registered paths exist.
#[derive(Default)]
pub struct FakeFileProbe {
    readable: HashSet<PathBuf>,
    executable: HashSet<PathBuf>,
}

impl FakeFileProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.readable.insert(path.into());
        self
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.readable.insert(path.clone());
        self.executable.insert(path);
        self
    }
}

impl FileProbe for FakeFileProbe {
    fn is_readable_file(&self, path: &Path) -> bool {
        self.readable.contains(path)
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.executable.contains(path)
    }
}
