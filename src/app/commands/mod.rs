pub mod launch;
pub mod report;
