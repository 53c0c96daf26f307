//! Command handlers
//!
//! Each subcommand maps onto one `DeploymentAssistant` operation. Failures
//! are returned to `main`, which reports them and exits non-zero.

mod context;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    let config = context::load_config(&cli)?;
    let log = context::deploy_log(cli.json, cli.command);
    let assistant = context::build_assistant(config, log).await;

    tracing::info!(
        command = cli.command.name(),
        stage = assistant.config().stage(),
        "running command"
    );

    match cli.command {
        Commands::SyncToS3 => assistant.sync_directory().await?,
        Commands::BucketInfo => assistant.bucket_info().await?,
        Commands::DomainInfo => {
            assistant.domain_info().await?;
        }
        Commands::InvalidateCloudFrontCache => assistant.invalidate_cache().await?,
    }

    Ok(())
}
