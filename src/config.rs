//! Resolver configuration
//!
//! Preferences are stored at `~/.tfm-values/config.toml`:
//!
//! ```toml
//! display_name_policy = "strict"
//!
//! [output]
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::DisplayNamePolicy;
use crate::output::OutputMode;
use crate::paths;

/// tfm-values configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Treatment of supported frameworks without a `DisplayName`
    #[serde(default)]
    pub display_name_policy: DisplayNamePolicy,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given
    #[serde(default)]
    pub format: OutputMode,
}

impl ResolverConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load config from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save config to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }
}
