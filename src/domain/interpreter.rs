use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where the chosen interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpreterSource {
    /// One of the fixed absolute candidates.
    Candidate,
    /// The unqualified fallback, resolved through `PATH` at exec time.
    SearchPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    pub program: OsString,
    pub source: InterpreterSource,
}

impl Interpreter {
    pub fn program(&self) -> &OsStr {
        &self.program
    }
}

/// Pick the first executable entry of `candidates`, else `fallback`.
pub fn select_interpreter<'a, I, F>(
    candidates: I,
    fallback: &OsStr,
    is_executable: F,
) -> Interpreter
where
    I: IntoIterator<Item = &'a PathBuf>,
    F: Fn(&Path) -> bool,
{
    candidates
        .into_iter()
        .find(|candidate| is_executable(candidate))
        .map(|candidate| Interpreter {
            program: candidate.clone().into_os_string(),
            source: InterpreterSource::Candidate,
        })
        .unwrap_or_else(|| Interpreter {
            program: fallback.to_os_string(),
            source: InterpreterSource::SearchPath,
        })
}
