//! JSON Log
//!
//! Outputs log messages as NDJSON for CI/automation consumption.

use crate::domain::ports::DeployLog;
use std::io::{self, Write};
use std::sync::Mutex;

/// Log that outputs one NDJSON event per message
pub struct JsonLog {
    /// Command name attached to every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLog {
    /// Create a JSON log writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON log writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl DeployLog for JsonLog {
    fn log(&self, message: &str) {
        let event = serde_json::json!({
            "event": "log",
            "command": self.command,
            "message": message,
        });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
