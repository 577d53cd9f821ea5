//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::{Deserialize, Serialize};

use crate::core::models::ValueRecord;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of resolving supported values
#[derive(Debug, Serialize)]
pub struct ValuesResult {
    /// Where the values came from (rule name, or `none`)
    pub source: String,
    /// Values in display order
    pub values: Vec<ValueInfo>,
}

/// A single supported value
#[derive(Debug, Serialize)]
pub struct ValueInfo {
    /// Machine name persisted into the project
    pub name: String,
    /// Label shown to the user
    pub display_name: String,
}

impl From<&ValueRecord> for ValueInfo {
    fn from(record: &ValueRecord) -> Self {
        Self {
            name: record.name().to_string(),
            display_name: record.display_name().to_string(),
        }
    }
}

/// Rules a provider requires
#[derive(Debug, Serialize)]
pub struct RulesResult {
    /// Capability that activates the provider
    pub applies_to: String,
    /// Required rule names
    pub rules: Vec<String>,
}

/// Natural-order comparison of two labels
#[derive(Debug, Serialize)]
pub struct CompareResult {
    /// Left label
    pub left: String,
    /// Right label
    pub right: String,
    /// `less`, `equal` or `greater`
    pub ordering: String,
}

impl ValuesResult {
    /// Build a result from resolved records
    #[must_use]
    pub fn new(source: impl Into<String>, records: &[ValueRecord]) -> Self {
        Self {
            source: source.into(),
            values: records.iter().map(ValueInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.values.is_empty() {
            println!("No supported target frameworks.");
            return;
        }

        println!("Supported target frameworks ({}):\n", self.source);
        for row in self.rows() {
            println!("{row}");
        }
    }

    /// Human-readable rows, with names aligned in one column
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        let width = self.values.iter().map(|v| v.display_name.chars().count()).max().unwrap_or(0);
        self.values
            .iter()
            .map(|value| format!("  {:<width$}  {}", value.display_name, value.name))
            .collect()
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RulesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Applies to projects with capability: {}", self.applies_to);
                println!("Required rules:");
                for rule in &self.rules {
                    println!("  {rule}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl CompareResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let symbol = match self.ordering.as_str() {
                    "less" => "<",
                    "greater" => ">",
                    _ => "=",
                };
                println!("{} {symbol} {}", self.left, self.right);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
