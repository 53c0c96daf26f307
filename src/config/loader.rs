//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::Config;

/// File name of the project configuration
pub const PROJECT_CONFIG_FILE: &str = "webdeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but does not parse is an error; a missing
/// file falls through to the next level.
pub fn load_or_default(project_root: Option<&Path>) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            tracing::debug!(path = %project_config.display(), "loading project config");
            return load_with_warnings(&project_config);
        }
    }

    if let Some(user_config_dir) = dirs_config_dir() {
        let user_config = user_config_dir.join("webdeploy/config.toml");
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            return load_with_warnings(&user_config);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (WEBDEPLOY_* prefix)
///
/// `lookup` reads a variable by name; empty values are ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(stage) = var("WEBDEPLOY_STAGE") {
        config.provider.stage = stage;
    }
    if let Some(region) = var("WEBDEPLOY_REGION") {
        config.provider.region = Some(region);
    }
    if let Some(profile) = var("WEBDEPLOY_PROFILE") {
        config.provider.profile = Some(profile);
    }
    if let Some(stack_name) = var("WEBDEPLOY_STACK_NAME") {
        config.provider.stack_name = Some(stack_name);
    }
    if let Some(path) = var("WEBDEPLOY_S3_LOCAL_PATH") {
        config.custom.s3_local_path = Some(PathBuf::from(path));
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "service",
        "name",
        "provider",
        "stage",
        "region",
        "profile",
        "stack_name",
        "custom",
        "s3_local_path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("region", "region"), 0);
        assert_eq!(levenshtein("regoin", "region"), 2);
        assert_eq!(levenshtein("", "stage"), 5);
    }

    #[test]
    fn suggest_key_finds_close_match() {
        assert_eq!(suggest_key("profle"), Some("profile".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn warning_display_includes_location_and_suggestion() {
        let warning = ConfigWarning {
            key: "regin".to_string(),
            file: PathBuf::from("webdeploy.toml"),
            line: Some(4),
            suggestion: Some("region".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'regin' in webdeploy.toml:4 (did you mean 'region'?)"
        );
    }
}
