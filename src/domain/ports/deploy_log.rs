//! Deploy Log Port
//!
//! The single user-visible output channel of every operation.

/// Trait for receiving user-facing log lines
///
/// Implementations can be:
/// - ConsoleLog: plain lines on stdout
/// - JsonLog: NDJSON event stream for CI
/// - NoopLog: Silent operation
pub trait DeployLog: Send + Sync {
    /// Handle one log message
    fn log(&self, message: &str);
}

/// No-op log for silent operation
pub struct NoopLog;

impl DeployLog for NoopLog {
    fn log(&self, _message: &str) {
        // Do nothing
    }
}
