/// Port for persisting launch failures outside the terminal.
pub trait FailureLog {
    /// Append one failure message. Errors are swallowed by implementations.
    fn record(&self, message: &str);
}
