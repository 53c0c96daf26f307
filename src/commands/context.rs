use std::sync::Arc;

use anyhow::{Context, Result};

use webdeploy::application::DeploymentAssistant;
use webdeploy::config::{Config, ConfigOverrides};
use webdeploy::domain::ports::DeployLog;
use webdeploy::infrastructure::{
    load_sdk_config, CloudFormationStacks, CloudFrontDistributions, ConsoleLog, JsonLog,
    ProcessRunner,
};

use crate::cli::{Cli, Commands};

/// Resolve configuration: file (explicit or discovered), then env, then CLI flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (config, warnings) = match &cli.config {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Config::load_or_default(Some(cwd.as_path()))?
        }
    };

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok(config.with_env_overrides().with_overrides(ConfigOverrides {
        stage: cli.stage.clone(),
        region: cli.region.clone(),
        profile: cli.profile.clone(),
    }))
}

pub fn deploy_log(json: bool, command: Commands) -> Arc<dyn DeployLog> {
    if json {
        Arc::new(JsonLog::stdout(command.name()))
    } else {
        Arc::new(ConsoleLog::stdout())
    }
}

/// Wire the assistant to the AWS SDK and the `aws` CLI
pub async fn build_assistant(config: Config, log: Arc<dyn DeployLog>) -> DeploymentAssistant {
    let sdk_config = load_sdk_config(&config).await;

    DeploymentAssistant::new(
        config,
        Arc::new(CloudFormationStacks::new(&sdk_config)),
        Arc::new(CloudFrontDistributions::new(&sdk_config)),
        Arc::new(ProcessRunner),
        log,
    )
}
