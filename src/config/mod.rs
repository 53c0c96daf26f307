//! Configuration module for webdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WEBDEPLOY_*)
//! 3. Project config (./webdeploy.toml or --config)
//! 4. User config (~/.config/webdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ConfigOverrides, CustomConfig, ProviderConfig, ServiceConfig};
