//! Stack outputs port - abstracts the infrastructure-stack query.

use async_trait::async_trait;

use crate::domain::entities::StackOutput;
use crate::error::DeployResult;

/// Queries the outputs of a deployed stack.
#[async_trait]
pub trait StackOutputs: Send + Sync {
    /// Describe `stack_name` and return the outputs of the first stack in
    /// the response.
    ///
    /// A stack without outputs yields an empty list. A response without any
    /// stack is `DeployError::StackNotFound`.
    async fn describe_outputs(&self, stack_name: &str) -> DeployResult<Vec<StackOutput>>;
}
