//! Tests for snapshot sources
//!
//! Snapshot documents on disk and in-memory sources feeding the provider.

use std::fs;

use tempfile::TempDir;
use tfm_values::adapters::file::{FileSnapshotSource, SnapshotFormat};
use tfm_values::core::models::schema;
use tfm_values::core::ports::{SnapshotSource, ValuesProvider};
use tfm_values::core::services::TargetFrameworksProvider;

use super::common::{MockSnapshotSource, full_snapshot, general};

const SNAPSHOT_JSON: &str = r#"{
  "rules": {
    "ConfigurationGeneral": {
      "properties": { "TargetFrameworkIdentifier": ".NETCoreApp", "TargetFramework": "net8.0" }
    },
    "SupportedNETCoreAppTargetFramework": {
      "items": [
        { "key": ".NETCoreApp,Version=v10.0", "properties": { "DisplayName": ".NET 10.0" } },
        { "key": ".NETCoreApp,Version=v8.0", "properties": { "DisplayName": ".NET 8.0" } }
      ]
    },
    "SupportedNETFrameworkTargetFramework": {},
    "SupportedNETStandardTargetFramework": {}
  }
}"#;

#[test]
fn file_source_reads_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT_JSON).unwrap();

    let source = FileSnapshotSource::new(&path);
    assert_eq!(source.format(), SnapshotFormat::Json);

    let snapshot = source.load().unwrap();
    let values = TargetFrameworksProvider::default().values(&snapshot).unwrap();
    let names: Vec<&str> = values.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec![".NETCoreApp,Version=v8.0", ".NETCoreApp,Version=v10.0"]);
}

#[test]
fn file_source_with_explicit_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.txt");
    fs::write(
        &path,
        "[rules.ConfigurationGeneral.properties]\nTargetFramework = \"net11.0\"\n",
    )
    .unwrap();

    let source = FileSnapshotSource::with_format(&path, SnapshotFormat::Toml);
    let snapshot = source.load().unwrap();
    assert_eq!(
        snapshot.rule(schema::CONFIGURATION_GENERAL).unwrap().property(schema::TARGET_FRAMEWORK),
        Some("net11.0")
    );
}

#[test]
fn file_source_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = FileSnapshotSource::new(dir.path().join("absent.json"));
    let err = source.load().unwrap_err();
    assert!(err.to_string().contains("failed to read snapshot"));
}

#[test]
fn file_source_malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "{ \"rules\": [] }").unwrap();

    let err = FileSnapshotSource::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("failed to parse snapshot"));
}

#[test]
fn mock_source_feeds_provider() {
    let source = MockSnapshotSource::new(full_snapshot(general(".NETStandard", "", "")));
    let provider = TargetFrameworksProvider::default();

    let first = provider.values(&source.load().unwrap()).unwrap();
    let second = provider.values(&source.load().unwrap()).unwrap();

    assert_eq!(source.loads(), 2);
    assert_eq!(source.describe(), "memory");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
