//! Presentable property values

use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A candidate value for an enumerated project property
///
/// `name` is the machine identifier written back into project configuration,
/// `display_name` is the label shown to the user. Two records are equal when
/// their names are equal.
#[derive(Debug, Clone, Serialize)]
pub struct ValueRecord {
    name: String,
    display_name: String,
}

impl ValueRecord {
    /// Create a record
    ///
    /// An empty `display_name` is replaced by `name`, so a named record always
    /// has something to show.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let name = name.into();
        let mut display_name = display_name.into();
        if display_name.is_empty() {
            display_name.clone_from(&name);
        }
        Self { name, display_name }
    }

    /// Machine identifier, exactly as evaluation reported it
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable label
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl PartialEq for ValueRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ValueRecord {}

impl Hash for ValueRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for ValueRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.name)
    }
}
