//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use tfm_values::core::models::ValueRecord;
use tfm_values::output::{CompareResult, OutputMode, RulesResult, ValuesResult};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn values_result_keeps_record_order() {
    let records = vec![
        ValueRecord::new(".NETCoreApp,Version=v3.1", ".NET Core 3.1"),
        ValueRecord::new(".NETCoreApp,Version=v5.0", ".NET 5.0"),
    ];
    let result = ValuesResult::new("SupportedNETCoreAppTargetFramework", &records);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "SupportedNETCoreAppTargetFramework");
    assert_eq!(json["values"][0]["name"], ".NETCoreApp,Version=v3.1");
    assert_eq!(json["values"][0]["display_name"], ".NET Core 3.1");
    assert_eq!(json["values"][1]["name"], ".NETCoreApp,Version=v5.0");
}

#[test]
fn values_result_rows_align_non_ascii_labels() {
    let records = vec![
        ValueRecord::new("net8.0", ".NET 8.0"),
        ValueRecord::new("netcoreapp3.1", "Ünïcødé 3.1"),
    ];
    let rows = ValuesResult::new("SupportedNETCoreAppTargetFramework", &records).rows();

    assert_eq!(rows.len(), 2);
    let columns: Vec<usize> = rows
        .iter()
        .map(|row| row.chars().count() - row.split_whitespace().last().unwrap().chars().count())
        .collect();
    assert_eq!(columns[0], columns[1]);
    assert_eq!(rows[0], "  .NET 8.0     net8.0");
}

#[test]
fn rules_result_serialization() {
    let result = RulesResult {
        applies_to: "DotNet".to_string(),
        rules: vec!["ConfigurationGeneral".to_string()],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"applies_to\":\"DotNet\""));
    assert!(json.contains("ConfigurationGeneral"));
}

#[test]
fn compare_result_serialization() {
    let result = CompareResult {
        left: "net9.0".to_string(),
        right: "net10.0".to_string(),
        ordering: "less".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["ordering"], "less");
}

#[test]
fn output_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&OutputMode::Json).unwrap(), "\"json\"");
}
