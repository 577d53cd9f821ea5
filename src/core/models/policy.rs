//! Handling of items without a display label

use serde::{Deserialize, Serialize};

/// What to do when a supported-framework item has no `DisplayName`
///
/// Evaluation data can be partially populated while a project reloads, so the
/// default is to show the item's key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayNamePolicy {
    /// Use the item key as the label
    #[default]
    Lenient,
    /// Fail the transformation
    Strict,
}

impl std::fmt::Display for DisplayNamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for DisplayNamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Invalid display name policy: {s}. Use: lenient, strict")),
        }
    }
}
