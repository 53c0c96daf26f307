//! webdeploy - deploy a static web app to S3 behind CloudFront
//!
//! Reads the web app's bucket name and CloudFront domain from the outputs of
//! a CloudFormation stack, syncs a local directory to the bucket with the
//! `aws` CLI, and invalidates the distribution serving the domain.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::DeploymentAssistant;
pub use config::Config;
pub use error::{DeployError, DeployResult};
