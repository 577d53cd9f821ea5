//! Resolve supported target frameworks from a snapshot document

use std::path::Path;

use tfm_values::adapters::file::{FileSnapshotSource, SnapshotFormat};
use tfm_values::config::ResolverConfig;
use tfm_values::core::models::DisplayNamePolicy;
use tfm_values::core::ports::{SnapshotSource, ValuesProvider};
use tfm_values::core::services::{TargetFrameworksProvider, resolve_source, select};
use tfm_values::output::{OutputMode, ValuesResult};

/// Resolve and print the supported values for the snapshot at `path`
pub fn resolve(
    path: &Path,
    format: Option<SnapshotFormat>,
    strict: bool,
    config: &ResolverConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let source = match format {
        Some(format) => FileSnapshotSource::with_format(path, format),
        None => FileSnapshotSource::new(path),
    };
    let snapshot = source.load()?;

    let policy = if strict {
        DisplayNamePolicy::Strict
    } else {
        config.display_name_policy
    };
    log::debug!("resolving {} with {policy} display names", source.describe());

    let provider = TargetFrameworksProvider::new(policy);
    snapshot.require(provider.rule_names())?;
    let selected = select(&snapshot)?;
    let values = resolve_source(&snapshot, &selected, provider.policy())?;

    ValuesResult::new(selected.to_string(), &values).render(mode);
    Ok(())
}
