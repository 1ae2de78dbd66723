//! Configuration for the gitdeck binary
//!
//! Loaded from `<config dir>/gitdeck/config.toml` with sensible defaults
//! when the file is absent.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use gitdeck_stage::AnimatorConfig;

/// Main configuration structure for gitdeck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Appearance settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Staging animation tuning
    #[serde(default)]
    pub staging: StagingConfig,
    /// The user shown in the header
    #[serde(default)]
    pub user: Option<UserConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Built-in theme name ("dark" or "light")
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Milliseconds between progress ticks
    pub tick_ms: u64,
    /// Progress added per tick
    pub step: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            name: "dark".to_string(),
        }
    }
}

impl Default for StagingConfig {
    fn default() -> Self {
        StagingConfig {
            tick_ms: 200,
            step: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            staging: StagingConfig::default(),
            user: None,
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gitdeck").join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let Some(path) = Config::default_path() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Translates the staging section into animator tuning.
    pub fn animator_config(&self) -> AnimatorConfig {
        AnimatorConfig {
            period: Duration::from_millis(self.staging.tick_ms.max(1)),
            step: self.staging.step.max(1),
        }
    }
}
