//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod aws_command;
mod output_key;

pub use aws_command::{AwsCommand, AWS_PROGRAM};
pub use output_key::OutputKey;
