//! Configuration loading for plugview.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::snippet::DEFAULT_CONTEXT_WIDTH;

/// Top-level configuration loaded from config.toml.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Configuration for description previews.
#[derive(Debug, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_context_width")]
    pub context_width: usize,
}

fn default_context_width() -> usize {
    DEFAULT_CONTEXT_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            context_width: default_context_width(),
        }
    }
}

impl Config {
    /// Load config from `$PLUGVIEW_CONFIG`, falling back to
    /// ~/.config/plugview/config.toml, or return defaults when neither
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if let Some(path) = config_path {
            if path.exists() {
                let contents = std::fs::read_to_string(&path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PLUGVIEW_CONFIG") {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("", "", "plugview").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
