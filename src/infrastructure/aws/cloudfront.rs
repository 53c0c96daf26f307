//! CloudFront distribution listing

use async_trait::async_trait;
use aws_config::{Region, SdkConfig};
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::Client;

use crate::domain::entities::Distribution;
use crate::domain::ports::Distributions;
use crate::error::{DeployError, DeployResult};

/// CloudFront is a global service; its API lives in us-east-1.
const CLOUDFRONT_REGION: &str = "us-east-1";

/// Lists distributions with `ListDistributions`, following page markers
pub struct CloudFrontDistributions {
    client: Client,
}

impl CloudFrontDistributions {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        let mut builder = aws_sdk_cloudfront::config::Builder::from(sdk_config);
        if sdk_config.region().is_none() {
            builder = builder.region(Region::new(CLOUDFRONT_REGION));
        }
        Self {
            client: Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl Distributions for CloudFrontDistributions {
    async fn list_distributions(&self) -> DeployResult<Vec<Distribution>> {
        let mut distributions = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let response = self
                .client
                .list_distributions()
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| DeployError::Provider {
                    service: "CloudFront",
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            let Some(list) = response.distribution_list() else {
                break;
            };

            distributions.extend(
                list.items()
                    .iter()
                    .map(|summary| Distribution::new(summary.id(), summary.domain_name())),
            );

            match next_page_marker(list.is_truncated(), list.next_marker()) {
                Some(next) => {
                    tracing::trace!(marker = %next, "fetching next distribution page");
                    marker = Some(next);
                }
                None => break,
            }
        }

        Ok(distributions)
    }
}

/// Marker for the next page, if the listing was truncated
fn next_page_marker(is_truncated: bool, next_marker: Option<&str>) -> Option<String> {
    if !is_truncated {
        return None;
    }
    next_marker.filter(|m| !m.is_empty()).map(str::to_string)
}
