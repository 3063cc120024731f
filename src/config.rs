use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Represents the complete configuration for git-changelog.
///
/// Contains the repository identity used for pull request links and the tag
/// namespace restriction.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub tags: TagsConfig,
}

fn default_slug() -> String {
    "repo".to_string()
}

fn default_host() -> String {
    "https://github.com".to_string()
}

fn default_tag_pattern() -> String {
    "v*".to_string()
}

/// Where pull request links point.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// "owner/name" slug spliced into pull request links
    #[serde(default = "default_slug")]
    pub slug: String,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            slug: default_slug(),
            host: default_host(),
        }
    }
}

/// Which tags participate in range selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Glob restricting the tag namespace
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitchangelog.toml` in current directory
/// 3. `~/.config/.gitchangelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitchangelog.toml").exists() {
        fs::read_to_string("./gitchangelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitchangelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("cannot parse configuration: {}", e)))
}
