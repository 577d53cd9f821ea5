//! Centralized path definitions for tfm-values
//!
//! ```text
//! ~/.tfm-values/
//! └── config.toml               # Resolver and output preferences
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".tfm-values";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global tfm-values directory.
///
/// Returns `~/.tfm-values/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.tfm-values/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
