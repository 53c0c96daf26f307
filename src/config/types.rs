//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

use super::loader::{self, ConfigWarning};

/// Service identity (used to derive the stack name)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub name: Option<String>,
}

/// Provider (AWS) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_stage")]
    pub stage: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub profile: Option<String>,

    /// Explicit stack name; overrides `<service>-<stage>`
    #[serde(default)]
    pub stack_name: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            stage: default_stage(),
            region: None,
            profile: None,
            stack_name: None,
        }
    }
}

fn default_stage() -> String {
    "dev".to_string()
}

/// Plugin-specific settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomConfig {
    /// Local directory synced to the web app bucket
    #[serde(default, alias = "s3LocalPath")]
    pub s3_local_path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub custom: CustomConfig,
}

/// Values supplied on the command line; `None` leaves the config untouched
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub stage: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (WEBDEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(stage) = overrides.stage {
            self.provider.stage = stage;
        }
        if overrides.region.is_some() {
            self.provider.region = overrides.region;
        }
        if overrides.profile.is_some() {
            self.provider.profile = overrides.profile;
        }
        self
    }

    pub fn stage(&self) -> &str {
        &self.provider.stage
    }

    /// Region, if configured and non-empty
    pub fn region(&self) -> Option<&str> {
        self.provider.region.as_deref().filter(|r| !r.is_empty())
    }

    /// Credential profile, if configured and non-empty
    pub fn profile(&self) -> Option<&str> {
        self.provider.profile.as_deref().filter(|p| !p.is_empty())
    }

    /// Local directory to sync, required by `syncToS3`
    pub fn s3_local_path(&self) -> DeployResult<&Path> {
        self.custom
            .s3_local_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| DeployError::config("custom.s3_local_path is not set"))
    }

    /// Resolve the CloudFormation stack name for the configured stage
    ///
    /// Uses `provider.stack_name` when set, otherwise `<service.name>-<stage>`.
    pub fn stack_name(&self) -> DeployResult<String> {
        if let Some(name) = self.provider.stack_name.as_deref().filter(|n| !n.is_empty()) {
            return Ok(name.to_string());
        }

        let service = self
            .service
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                DeployError::config("service.name is not set and no provider.stack_name given")
            })?;

        Ok(format!("{}-{}", service, self.stage()))
    }
}
