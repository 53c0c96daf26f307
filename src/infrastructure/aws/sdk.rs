//! Shared SDK configuration

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::config::Config;

/// Load the SDK configuration, honouring the configured region and profile.
///
/// Anything left unset falls through to the SDK's default provider chain
/// (environment, shared config files, instance metadata).
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = config.region() {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(profile) = config.profile() {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;
    tracing::debug!(region = ?sdk_config.region(), "loaded AWS SDK config");
    sdk_config
}
