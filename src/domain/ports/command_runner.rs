//! Command runner port - abstracts external process execution.

use crate::domain::entities::CommandOutput;
use crate::domain::value_objects::AwsCommand;
use crate::error::DeployResult;

/// Runs an external command to completion and captures its output.
///
/// Implementations block the calling thread until the process exits; there
/// is no timeout. Callers on an async runtime must dispatch the call to a
/// blocking-capable thread.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &AwsCommand) -> DeployResult<CommandOutput>;
}
