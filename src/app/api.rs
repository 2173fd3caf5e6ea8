//! API Facade for the application.
//!
//! Glues the real OS adapters to the launch command.

use std::convert::Infallible;

use crate::adapters::{FileFailureLog, LocalFileProbe, OsProcessHost};
use crate::app::AppContext;
use crate::app::commands;
use crate::domain::{AppError, LaunchPlan, LauncherConfig};

/// Create an `AppContext` over the running process.
pub fn os_context(
    config: LauncherConfig,
    verbose: bool,
) -> AppContext<LocalFileProbe, OsProcessHost> {
    AppContext::new(config, LocalFileProbe, OsProcessHost).with_verbose(verbose)
}

/// Resolve the launch plan for the running executable.
pub fn plan(config: LauncherConfig, verbose: bool) -> Result<LaunchPlan, AppError> {
    commands::launch::plan(&os_context(config, verbose))
}

/// Launch the project entry point, replacing this process.
pub fn launch(config: LauncherConfig, verbose: bool) -> Result<Infallible, AppError> {
    commands::launch::run(&os_context(config, verbose))
}

/// Report a fatal error to stderr and the configured failure log.
pub fn report(config: &LauncherConfig, err: &AppError) {
    let log = FileFailureLog::new(config.log_file.clone());
    commands::report::report_failure(config, &log, err);
}
