use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::interpreter::InterpreterSource;

/// Everything resolved before the working directory changes and the process
/// image is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub executable: PathBuf,
    pub bundle_parent: PathBuf,
    pub root: PathBuf,
    pub script: PathBuf,
    pub interpreter: PathBuf,
    pub interpreter_source: InterpreterSource,
}

impl LaunchPlan {
    /// Argument vector handed to the replacement process.
    pub fn argv(&self) -> [&std::ffi::OsStr; 2] {
        [self.interpreter.as_os_str(), self.script.as_os_str()]
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.interpreter_source {
            InterpreterSource::Candidate => "candidate",
            InterpreterSource::SearchPath => "PATH",
        };
        writeln!(f, "executable:  {}", self.executable.display())?;
        writeln!(f, "bundle dir:  {}", self.bundle_parent.display())?;
        writeln!(f, "root:        {}", self.root.display())?;
        writeln!(f, "script:      {}", self.script.display())?;
        write!(f, "interpreter: {} ({})", self.interpreter.display(), source)
    }
}
