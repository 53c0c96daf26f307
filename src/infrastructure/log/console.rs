//! Console Log
//!
//! Writes each message as one or more plain lines on stdout.

use crate::domain::ports::DeployLog;
use std::io::{self, Write};
use std::sync::Mutex;

/// Log that prints messages for humans
pub struct ConsoleLog {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLog {
    /// Create a console log writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a console log writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl DeployLog for ConsoleLog {
    fn log(&self, message: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", message);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_log_writes_one_line_per_message() {
        let buffer = SharedBuffer::default();
        let log = ConsoleLog::with_writer(buffer.clone());

        log.log("Web App Bucket: my-bucket");
        log.log("Web App Domain: Not Found");

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            written,
            "Web App Bucket: my-bucket\nWeb App Domain: Not Found\n"
        );
    }
}
