//! CloudFormation stack outputs

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudformation::error::DisplayErrorContext;
use aws_sdk_cloudformation::types::Output;
use aws_sdk_cloudformation::Client;

use crate::domain::entities::StackOutput;
use crate::domain::ports::StackOutputs;
use crate::error::{DeployError, DeployResult};

/// Reads stack outputs with `DescribeStacks`
pub struct CloudFormationStacks {
    client: Client,
}

impl CloudFormationStacks {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl StackOutputs for CloudFormationStacks {
    async fn describe_outputs(&self, stack_name: &str) -> DeployResult<Vec<StackOutput>> {
        let response = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| DeployError::Provider {
                service: "CloudFormation",
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let stack = response
            .stacks()
            .first()
            .ok_or_else(|| DeployError::StackNotFound {
                stack: stack_name.to_string(),
            })?;

        Ok(to_stack_outputs(stack.outputs()))
    }
}

/// Outputs without a key cannot be looked up and are dropped.
fn to_stack_outputs(outputs: &[Output]) -> Vec<StackOutput> {
    outputs
        .iter()
        .filter_map(|output| {
            let key = output.output_key()?;
            Some(StackOutput::new(key, output.output_value().unwrap_or_default()))
        })
        .collect()
}
