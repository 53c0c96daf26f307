//! Captured result of an external command

/// Output captured from a finished external command
///
/// `status` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Output of a command that exited with status 0
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Output of a command that exited with `status` and wrote `stderr`
    pub fn failure(status: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    /// True when the command wrote anything to standard error
    pub fn has_error_output(&self) -> bool {
        !self.stderr.is_empty()
    }

    /// True when the command exited with status 0
    pub fn exited_successfully(&self) -> bool {
        self.status == Some(0)
    }

    /// A command failed if it wrote to stderr or exited non-zero.
    pub fn is_failure(&self) -> bool {
        self.has_error_output() || !self.exited_successfully()
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}
