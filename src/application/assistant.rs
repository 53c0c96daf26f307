//! Deployment Assistant
//!
//! Composes stack-output lookups with `aws` CLI invocations. Every operation
//! is strictly sequential and terminal on its first failure:
//!
//! ```text
//! invalidate_cache: ResolveDomain -> ListDistributions -> MatchDistribution -> RunInvalidation
//! sync_directory:   ResolveLocalPath -> ResolveBucket -> RunSync
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::CommandOutput;
use crate::domain::ports::{CommandRunner, DeployLog, Distributions, StackOutputs};
use crate::domain::services::{find_distribution, find_output};
use crate::domain::value_objects::{AwsCommand, OutputKey};
use crate::error::{DeployError, DeployResult};

/// Orchestrates the four deployment operations over injected ports
pub struct DeploymentAssistant {
    config: Config,
    stacks: Arc<dyn StackOutputs>,
    distributions: Arc<dyn Distributions>,
    runner: Arc<dyn CommandRunner>,
    log: Arc<dyn DeployLog>,
}

impl DeploymentAssistant {
    pub fn new(
        config: Config,
        stacks: Arc<dyn StackOutputs>,
        distributions: Arc<dyn Distributions>,
        runner: Arc<dyn CommandRunner>,
        log: Arc<dyn DeployLog>,
    ) -> Self {
        Self {
            config,
            stacks,
            distributions,
            runner,
            log,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a stack output of the configured stage's stack
    ///
    /// Returns `Ok(None)` when the stack has no output named `key`.
    pub async fn stack_output(&self, key: &str) -> DeployResult<Option<String>> {
        let stack_name = self.config.stack_name()?;
        tracing::debug!(stack = %stack_name, key, "describing stack outputs");

        let outputs = self.stacks.describe_outputs(&stack_name).await?;
        tracing::trace!(count = outputs.len(), "stack outputs received");

        Ok(find_output(&outputs, key).map(|output| output.value().to_string()))
    }

    /// Print the CloudFront domain of the web app and return it
    ///
    /// An absent or empty output is logged as "Not Found" and then reported
    /// as `DeployError::DomainNotFound`.
    pub async fn domain_info(&self) -> DeployResult<String> {
        let domain = self
            .stack_output(OutputKey::WebAppDomain.as_str())
            .await?
            .filter(|value| !value.is_empty());

        match domain {
            Some(domain) => {
                self.log.log(&format!("Web App Domain: {}", domain));
                Ok(domain)
            }
            None => {
                self.log.log("Web App Domain: Not Found");
                Err(DeployError::DomainNotFound)
            }
        }
    }

    /// Print the S3 bucket name of the web app
    ///
    /// An absent output is not an error.
    pub async fn bucket_info(&self) -> DeployResult<()> {
        let bucket = self
            .stack_output(OutputKey::WebAppBucket.as_str())
            .await?
            .filter(|value| !value.is_empty());

        self.log.log(&format!(
            "Web App Bucket: {}",
            bucket.as_deref().unwrap_or("Not Found")
        ));
        Ok(())
    }

    /// Sync the configured local directory to the web app bucket
    pub async fn sync_directory(&self) -> DeployResult<()> {
        let local_path = self.config.s3_local_path()?.display().to_string();

        let bucket = self
            .stack_output(OutputKey::WebAppBucket.as_str())
            .await?
            .filter(|value| !value.is_empty())
            .ok_or_else(|| DeployError::OutputNotFound {
                key: OutputKey::WebAppBucket.to_string(),
            })?;

        let args = vec![
            "s3".to_string(),
            "sync".to_string(),
            local_path,
            format!("s3://{}/", bucket),
        ];
        self.log.log(&format!("{:?}", args));

        let command = self.aws_command(args);
        let output = self.execute(command.clone()).await?;

        self.log.log(&stream_or_placeholder(&output.stdout, "stdout"));
        self.log.log(&stream_or_placeholder(&output.stderr, "stderr"));

        if output.is_failure() {
            return Err(DeployError::CommandFailed {
                command: command.to_string(),
                status: output.status,
                stderr: output.stderr_lossy().trim_end().to_string(),
            });
        }

        self.log.log("Successfully synced to the S3 bucket");
        Ok(())
    }

    /// Invalidate every cached path of the distribution serving the web app
    pub async fn invalidate_cache(&self) -> DeployResult<()> {
        let domain = self.domain_info().await?;

        tracing::debug!("listing CloudFront distributions");
        let distributions = self.distributions.list_distributions().await?;
        tracing::trace!(count = distributions.len(), "distributions received");

        let Some(distribution) = find_distribution(&distributions, &domain) else {
            let err = DeployError::DistributionNotFound { domain };
            self.log.log(&err.to_string());
            return Err(err);
        };

        self.log.log(&format!(
            "Invalidating CloudFront distribution with id: {}",
            distribution.id()
        ));

        let args = vec![
            "cloudfront".to_string(),
            "create-invalidation".to_string(),
            "--distribution-id".to_string(),
            distribution.id().to_string(),
            "--paths".to_string(),
            "/*".to_string(),
        ];
        let output = self.run_aws(args).await?;

        if output.is_failure() {
            return Err(DeployError::InvalidationFailed);
        }

        self.log.log("Successfully invalidated CloudFront cache");
        Ok(())
    }

    /// Run an `aws` command, logging whatever it wrote to stdout and stderr
    pub async fn run_aws(&self, args: Vec<String>) -> DeployResult<CommandOutput> {
        let output = self.execute(self.aws_command(args)).await?;

        if !output.stdout.is_empty() {
            self.log.log(output.stdout_lossy().trim_end_matches('\n'));
        }
        if output.has_error_output() {
            self.log.log(output.stderr_lossy().trim_end_matches('\n'));
        }

        Ok(output)
    }

    fn aws_command(&self, args: Vec<String>) -> AwsCommand {
        AwsCommand::new(self.config.region(), self.config.profile(), args)
    }

    /// Run `command` on the blocking pool so the runtime keeps serving other tasks
    async fn execute(&self, command: AwsCommand) -> DeployResult<CommandOutput> {
        tracing::debug!(command = %command, "running aws command");

        let runner = Arc::clone(&self.runner);
        let display = command.to_string();
        let output = tokio::task::spawn_blocking(move || runner.run(&command))
            .await
            .map_err(|e| DeployError::CommandSpawn {
                command: display,
                source: std::io::Error::other(e),
            })??;

        tracing::debug!(status = ?output.status, "aws command finished");
        Ok(output)
    }
}

fn stream_or_placeholder(stream: &[u8], name: &str) -> String {
    if stream.is_empty() {
        format!("{}: <empty>", name)
    } else {
        String::from_utf8_lossy(stream).trim_end_matches('\n').to_string()
    }
}
