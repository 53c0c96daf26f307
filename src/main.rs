//! webdeploy CLI - deploy a static web app to S3 behind CloudFront
//!
//! Usage: webdeploy <COMMAND>
//!
//! Commands:
//!   syncToS3                   Sync the local app directory to the web app bucket
//!   bucketInfo                 Print the web app bucket name
//!   domainInfo                 Print the CloudFront domain name
//!   invalidateCloudFrontCache  Invalidate the CloudFront cache

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    commands::run(cli).await
}

/// Initialize diagnostics on stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("webdeploy={}", default_level)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
