pub mod failure_log_file;
pub mod local_file_probe;
pub mod os_process_host;

pub use failure_log_file::FileFailureLog;
pub use local_file_probe::LocalFileProbe;
pub use os_process_host::OsProcessHost;
