//! Process Runner
//!
//! Runs `aws` CLI commands as child processes and captures their output.

use std::process::{Command, Stdio};

use crate::domain::entities::CommandOutput;
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::AwsCommand;
use crate::error::{DeployError, DeployResult};

/// Command runner backed by `std::process`
///
/// Blocks until the child exits. Stdin is closed so the CLI never waits
/// for interactive input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &AwsCommand) -> DeployResult<CommandOutput> {
        let output = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DeployError::CommandSpawn {
                command: command.to_string(),
                source: e,
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
