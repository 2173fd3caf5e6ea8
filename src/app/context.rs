use std::fmt;

use crate::domain::LauncherConfig;
use crate::ports::{FileProbe, ProcessHost};

/// Application context holding configuration and OS ports for a launch.
pub struct AppContext<P: FileProbe, H: ProcessHost> {
    config: LauncherConfig,
    probe: P,
    host: H,
    verbose: bool,
}

impl<P: FileProbe, H: ProcessHost> AppContext<P, H> {
    /// Create a new application context.
    pub fn new(config: LauncherConfig, probe: P, host: H) -> Self {
        Self { config, probe, host, verbose: false }
    }

    /// Enable step tracing on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Print a step trace when verbose.
    pub fn trace(&self, message: fmt::Arguments<'_>) {
        if self.verbose {
            eprintln!("[launcher] {}", message);
        }
    }
}
