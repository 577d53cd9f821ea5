//! Rule selection - decides where the supported values come from
//!
//! The `TargetFrameworkIdentifier` of the general configuration picks one of
//! the family rules. When it names no known family, the currently evaluated
//! `TargetFramework` is carried forward as a fallback instead.

use log::debug;

use crate::core::models::{FrameworkFamily, Snapshot, SnapshotError, schema};

/// Where the supported values for a snapshot come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// The items of the family's rule
    NamedRule(FrameworkFamily),

    /// A single value synthesized from the current configuration
    ScalarFallback {
        /// The evaluated `TargetFramework`
        value: String,
        /// The evaluated `TargetFrameworkMoniker`, preferred as the machine name
        moniker: Option<String>,
        /// The unrecognized family identifier, preferred as the label
        display_hint: Option<String>,
    },

    /// Nothing to offer
    Empty,
}

impl ResolvedSource {
    /// Name of the rule to read, for [`Self::NamedRule`]
    #[must_use]
    pub const fn rule_name(&self) -> Option<&'static str> {
        match self {
            Self::NamedRule(family) => Some(family.rule_name()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResolvedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamedRule(family) => write!(f, "{}", family.rule_name()),
            Self::ScalarFallback { .. } => write!(f, "{}", schema::CONFIGURATION_GENERAL),
            Self::Empty => write!(f, "none"),
        }
    }
}

/// Select the source of supported values for a snapshot
///
/// Only `ConfigurationGeneral` is read here; the snapshot must contain it.
///
/// # Errors
///
/// Returns [`SnapshotError::MissingRule`] if `ConfigurationGeneral` is absent.
pub fn select(snapshot: &Snapshot) -> Result<ResolvedSource, SnapshotError> {
    let general = snapshot.rule(schema::CONFIGURATION_GENERAL)?;

    let identifier = non_empty(general.property(schema::TARGET_FRAMEWORK_IDENTIFIER));

    if let Some(family) = identifier.and_then(FrameworkFamily::from_identifier) {
        debug!("target framework identifier {family} selects {}", family.rule_name());
        return Ok(ResolvedSource::NamedRule(family));
    }

    let Some(value) = non_empty(general.property(schema::TARGET_FRAMEWORK)) else {
        debug!("no recognized framework family and no current target framework");
        return Ok(ResolvedSource::Empty);
    };

    debug!(
        "unrecognized target framework identifier {:?}, falling back to current value {value}",
        identifier.unwrap_or_default()
    );

    Ok(ResolvedSource::ScalarFallback {
        value: value.to_string(),
        moniker: non_empty(general.property(schema::TARGET_FRAMEWORK_MONIKER)).map(str::to_string),
        display_hint: identifier.map(str::to_string),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
