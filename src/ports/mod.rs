mod failure_log;
mod file_probe;
mod process_host;

pub use failure_log::FailureLog;
pub use file_probe::FileProbe;
pub use process_host::ProcessHost;
