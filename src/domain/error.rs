use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
///
/// Every variant is fatal: the CLI reports it and exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// The running executable's own path could not be determined.
    #[error("could not resolve launcher executable path: {0}")]
    ExecutablePath(#[source] io::Error),

    /// The executable path could not be canonicalized.
    #[error("could not canonicalize {}: {source}", .path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The marker file was not found within the bounded ancestor walk.
    #[error(
        "could not locate {} relative to {bundle} (searched {levels} levels up from {})",
        .marker.display(),
        .start.display()
    )]
    MarkerNotFound { marker: PathBuf, bundle: String, start: PathBuf, levels: usize },

    /// The working directory could not be changed to the project root.
    #[error("could not change directory to {}: {source}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Replacing the process image with the interpreter failed.
    #[error("could not exec {interpreter}: {source}")]
    ReplaceProcess {
        interpreter: String,
        #[source]
        source: io::Error,
    },

    /// A dry-run plan could not be rendered.
    #[error("could not render launch plan: {0}")]
    PlanEncoding(#[from] serde_json::Error),
}

impl AppError {
    /// Underlying OS error, when the failure came from a system call.
    pub fn os_error(&self) -> Option<&io::Error> {
        match self {
            AppError::ExecutablePath(source)
            | AppError::Canonicalize { source, .. }
            | AppError::ChangeDirectory { source, .. }
            | AppError::ReplaceProcess { source, .. } => Some(source),
            AppError::MarkerNotFound { .. } | AppError::PlanEncoding(_) => None,
        }
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::MarkerNotFound { .. } => io::ErrorKind::NotFound,
            AppError::PlanEncoding(_) => io::ErrorKind::InvalidData,
            other => other.os_error().map(io::Error::kind).unwrap_or(io::ErrorKind::Other),
        }
    }
}
