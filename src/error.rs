//! Error types for webdeploy
//!
//! Library code returns `DeployError`; the binary wraps it in `anyhow` at the
//! dispatch edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for webdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The stack query returned no stack at all
    #[error("stack '{stack}' not found")]
    StackNotFound { stack: String },

    /// A required stack output is absent or empty
    #[error("stack output '{key}' not found")]
    OutputNotFound { key: String },

    /// The CloudFront domain output could not be resolved
    #[error("Could not extract Web App Domain")]
    DomainNotFound,

    /// No CloudFront distribution serves the resolved domain
    #[error("Could not find distribution with domain {domain}")]
    DistributionNotFound { domain: String },

    /// The `create-invalidation` command reported an error
    #[error("Failed invalidating CloudFront cache")]
    InvalidationFailed,

    /// An external command reported an error
    #[error("command '{command}' failed (exit status: {}): {stderr}", display_status(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// An external command could not be started
    #[error("failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A provider request (CloudFormation, CloudFront) failed
    #[error("{service} request failed: {message}")]
    Provider {
        service: &'static str,
        message: String,
    },

    /// Configuration is missing a required value
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

fn display_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "unknown".to_string(), |code| code.to_string())
}
