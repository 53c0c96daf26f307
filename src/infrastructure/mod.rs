//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - AWS SDK adapters (CloudFormation stack outputs, CloudFront distributions)
//! - `process` - `aws` CLI process runner
//! - `log/` - Deploy log sinks (Console, JSON)

pub mod aws;
pub mod log;
pub mod process;

// Re-export for convenience
pub use aws::{load_sdk_config, CloudFormationStacks, CloudFrontDistributions};
pub use log::{ConsoleLog, JsonLog};
pub use process::ProcessRunner;
