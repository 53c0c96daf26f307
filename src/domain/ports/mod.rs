//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_log;
pub mod distributions;
pub mod stack_outputs;

pub use command_runner::CommandRunner;
pub use deploy_log::{DeployLog, NoopLog};
pub use distributions::Distributions;
pub use stack_outputs::StackOutputs;
