//! Evaluation snapshots
//!
//! A [`Snapshot`] is an immutable, point-in-time view of project evaluation
//! state, keyed by rule name. Each [`RuleTable`] carries the rule's scalar
//! properties plus an ordered list of items, where every item is a key with
//! its own property bag.
//!
//! # Examples
//!
//! ```
//! use tfm_values::core::models::{RuleItem, RuleTable, Snapshot};
//!
//! let snapshot = Snapshot::new()
//!     .with_rule(
//!         "ConfigurationGeneral",
//!         RuleTable::new().with_property("TargetFrameworkIdentifier", ".NETCoreApp"),
//!     )
//!     .with_rule(
//!         "SupportedNETCoreAppTargetFramework",
//!         RuleTable::new()
//!             .with_item(RuleItem::new(".NETCoreApp,Version=v8.0").with_property("DisplayName", ".NET 8.0")),
//!     );
//!
//! let general = snapshot.rule("ConfigurationGeneral").unwrap();
//! assert_eq!(general.property("TargetFrameworkIdentifier"), Some(".NETCoreApp"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property bag: property name to property value
pub type Properties = BTreeMap<String, String>;

/// Errors raised when a snapshot does not satisfy its contract
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// A rule the consumer declared as required is absent
    #[error("snapshot is missing required rule: {0}")]
    MissingRule(String),

    /// The snapshot document could not be parsed
    #[error("malformed snapshot: {0}")]
    Parse(String),
}

/// A single item (row) of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleItem {
    /// Item key, e.g. `.NETCoreApp,Version=v8.0`
    pub key: String,

    /// Item metadata
    #[serde(default)]
    pub properties: Properties,
}

impl RuleItem {
    /// Create an item with no properties
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            properties: Properties::new(),
        }
    }

    /// Add a property to this item
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property value
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// One named rule of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Scalar properties (the "current" values for configuration rules)
    #[serde(default)]
    properties: Properties,

    /// Items in source order
    #[serde(default)]
    items: Vec<RuleItem>,
}

impl RuleTable {
    /// Create an empty rule table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar property
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Append an item, keeping insertion order
    #[must_use]
    pub fn with_item(mut self, item: RuleItem) -> Self {
        self.items.push(item);
        self
    }

    /// Look up a scalar property
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Items in source order
    #[must_use]
    pub fn items(&self) -> &[RuleItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the rule has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Immutable view of project evaluation state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    rules: BTreeMap<String, RuleTable>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a rule
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, table: RuleTable) -> Self {
        self.rules.insert(name.into(), table);
        self
    }

    /// Get a rule that the caller requires to be present
    ///
    /// A missing rule is a contract violation by whoever built the snapshot.
    pub fn rule(&self, name: &str) -> Result<&RuleTable, SnapshotError> {
        self.rules.get(name).ok_or_else(|| SnapshotError::MissingRule(name.to_string()))
    }

    /// Check whether a rule is present
    #[must_use]
    pub fn contains_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Verify that every named rule is present
    ///
    /// Reports the first missing rule in the order given.
    pub fn require(&self, names: &[&str]) -> Result<(), SnapshotError> {
        match names.iter().find(|name| !self.contains_rule(name)) {
            Some(missing) => Err(SnapshotError::MissingRule((*missing).to_string())),
            None => Ok(()),
        }
    }
}
