//! AWS SDK adapters
//!
//! Implements StackOutputs and Distributions on top of the AWS SDK.
//! Provider errors are reported with their full error chain.

mod cloudformation;
mod cloudfront;
mod sdk;

pub use cloudformation::CloudFormationStacks;
pub use cloudfront::CloudFrontDistributions;
pub use sdk::load_sdk_config;
