//! Target framework families
//!
//! The family identifier reported by evaluation decides which rule holds the
//! authoritative list of supported frameworks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::schema;

/// Error returned when a string is not a known family identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown target framework identifier: {0}")]
pub struct FamilyParseError(pub String);

/// A framework family with its own list of supported frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkFamily {
    /// `.NETCoreApp` (.NET Core and .NET 5+)
    NetCoreApp,
    /// `.NETFramework`
    NetFramework,
    /// `.NETStandard`
    NetStandard,
}

impl FrameworkFamily {
    /// All families, in matching priority order
    pub const ALL: [Self; 3] = [Self::NetCoreApp, Self::NetFramework, Self::NetStandard];

    /// The `TargetFrameworkIdentifier` value for this family
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::NetCoreApp => ".NETCoreApp",
            Self::NetFramework => ".NETFramework",
            Self::NetStandard => ".NETStandard",
        }
    }

    /// The same identifier without its leading dot, e.g. `NETCoreApp`
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::NetCoreApp => "NETCoreApp",
            Self::NetFramework => "NETFramework",
            Self::NetStandard => "NETStandard",
        }
    }

    /// Whether `identifier` names this family, in either spelling
    ///
    /// Comparison ignores ASCII case and requires the whole token to match.
    #[must_use]
    pub fn matches(self, identifier: &str) -> bool {
        self.identifier().eq_ignore_ascii_case(identifier) || self.alias().eq_ignore_ascii_case(identifier)
    }

    /// Name of the rule listing this family's supported frameworks
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::NetCoreApp => schema::SUPPORTED_NETCOREAPP_TARGET_FRAMEWORK,
            Self::NetFramework => schema::SUPPORTED_NETFRAMEWORK_TARGET_FRAMEWORK,
            Self::NetStandard => schema::SUPPORTED_NETSTANDARD_TARGET_FRAMEWORK,
        }
    }

    /// Match an identifier against the known families, in priority order
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.matches(identifier))
    }
}

impl std::fmt::Display for FrameworkFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl std::str::FromStr for FrameworkFamily {
    type Err = FamilyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| FamilyParseError(s.to_string()))
    }
}
