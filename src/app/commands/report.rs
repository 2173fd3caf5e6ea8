use crate::domain::{AppError, LauncherConfig};
use crate::ports::FailureLog;

/// Line printed to stderr for a fatal launch error.
pub fn failure_message(config: &LauncherConfig, err: &AppError) -> String {
    format!("{} launcher error: {}", config.app_name, err)
}

/// Print a fatal error and append it to the failure log.
pub fn report_failure(config: &LauncherConfig, log: &impl FailureLog, err: &AppError) {
    eprintln!("{}", failure_message(config, err));
    log.record(&err.to_string());
}
