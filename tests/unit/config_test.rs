//! Tests for resolver configuration

use std::fs;

use tempfile::TempDir;
use tfm_values::config::{OutputConfig, ResolverConfig};
use tfm_values::core::models::DisplayNamePolicy;
use tfm_values::output::OutputMode;

#[test]
fn test_config_default() {
    let config = ResolverConfig::default();
    assert_eq!(config.display_name_policy, DisplayNamePolicy::Lenient);
    assert_eq!(config.output.format, OutputMode::Human);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ResolverConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ResolverConfig::default());
}

#[test]
fn test_load_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "display_name_policy = \"strict\"\n\n[output]\nformat = \"json\"\n").unwrap();

    let config = ResolverConfig::load_or_default(&path).unwrap();
    assert_eq!(config.display_name_policy, DisplayNamePolicy::Strict);
    assert_eq!(config.output.format, OutputMode::Json);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "display_name_policy = \"strict\"\n").unwrap();

    let config = ResolverConfig::load_from(&path).unwrap();
    assert_eq!(config.display_name_policy, DisplayNamePolicy::Strict);
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "display_name_policy = \"sometimes\"\n").unwrap();

    let err = ResolverConfig::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/dir/config.toml");
    let config = ResolverConfig {
        display_name_policy: DisplayNamePolicy::Strict,
        output: OutputConfig {
            format: OutputMode::Json,
        },
    };

    config.save_to(&path).unwrap();
    assert_eq!(ResolverConfig::load_from(&path).unwrap(), config);
}
