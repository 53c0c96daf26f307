//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentAssistant::bucket_info` - Print the web app bucket name
//! - `DeploymentAssistant::domain_info` - Print and return the CloudFront domain
//! - `DeploymentAssistant::sync_directory` - Sync the local app directory to the bucket
//! - `DeploymentAssistant::invalidate_cache` - Invalidate the distribution serving the domain

mod assistant;

pub use assistant::DeploymentAssistant;
