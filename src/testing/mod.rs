mod fake_file_probe;
mod fake_process_host;

pub use fake_file_probe::FakeFileProbe;
pub use fake_process_host::{FakeProcessHost, Replacement};
pub use memory_failure_log::MemoryFailureLog;
