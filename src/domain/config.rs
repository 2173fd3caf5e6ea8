//! Fixed launcher configuration.
//!
//! There is no configuration file: every value here is a compile-time
//! default. The only environment input is `HOME`, which locates the failure
//! log; `PATH` is consulted by exec itself for the fallback interpreter.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Display name of the application the bundle belongs to.
pub const APP_NAME: &str = "FixOnce";

/// Script whose presence identifies the project root.
pub const MARKER_FILE: &str = "scripts/app_launcher.py";

/// Components stripped from the executable path to reach the bundle's parent:
/// executable, `MacOS/`, `Contents/`, `<App>.app/`.
pub const BUNDLE_DEPTH: usize = 4;

/// Ancestor levels searched for the marker, the start directory included.
///
/// Bundles nested deeper than this below the project root are unsupported.
pub const MAX_ANCESTOR_LEVELS: usize = 8;

/// Absolute interpreter locations, tried in order.
pub const INTERPRETER_CANDIDATES: [&str; 3] = [
    "/Library/Frameworks/Python.framework/Versions/3.13/bin/python3",
    "/usr/local/bin/python3",
    "/opt/homebrew/bin/python3",
];

/// Unqualified interpreter name resolved through `PATH` when no candidate is executable.
pub const FALLBACK_INTERPRETER: &str = "python3";

/// Failure log location, relative to `$HOME`.
pub const LOG_FILE: &str = "Library/Logs/FixOnce-launcher.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub app_name: String,
    pub marker: PathBuf,
    pub bundle_depth: usize,
    pub max_ancestor_levels: usize,
    pub interpreter_candidates: Vec<PathBuf>,
    pub fallback_interpreter: OsString,
    /// `None` when `HOME` is unset or empty; failures are then only printed.
    pub log_file: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            marker: PathBuf::from(MARKER_FILE),
            bundle_depth: BUNDLE_DEPTH,
            max_ancestor_levels: MAX_ANCESTOR_LEVELS,
            interpreter_candidates: INTERPRETER_CANDIDATES.iter().map(PathBuf::from).collect(),
            fallback_interpreter: OsString::from(FALLBACK_INTERPRETER),
            log_file: None,
        }
    }
}

impl LauncherConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home = lookup("HOME").filter(|value| !value.is_empty());

        Self { log_file: home.map(|home| PathBuf::from(home).join(LOG_FILE)), ..Self::default() }
    }

    /// Bundle directory name, e.g. `FixOnce.app`.
    pub fn bundle_name(&self) -> String {
        format!("{}.app", self.app_name)
    }

    pub fn fallback_interpreter(&self) -> &OsStr {
        &self.fallback_interpreter
    }
}
