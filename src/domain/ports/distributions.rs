//! Distributions port - abstracts the CDN distribution listing.

use async_trait::async_trait;

use crate::domain::entities::Distribution;
use crate::error::DeployResult;

/// Lists the CDN distributions visible to the current credentials.
#[async_trait]
pub trait Distributions: Send + Sync {
    /// Return every distribution, across all result pages.
    async fn list_distributions(&self) -> DeployResult<Vec<Distribution>>;
}
