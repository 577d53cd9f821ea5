//! Supported values for the `TargetFramework` property

use log::debug;

use super::resolver::{ResolveError, resolve_source};
use super::selector::select;
use crate::core::models::{DisplayNamePolicy, Snapshot, ValueRecord, schema};
use crate::core::ports::ValuesProvider;

/// Rules every snapshot handed to [`TargetFrameworksProvider`] must contain
pub const REQUIRED_RULES: [&str; 4] = [
    schema::SUPPORTED_NETCOREAPP_TARGET_FRAMEWORK,
    schema::SUPPORTED_NETFRAMEWORK_TARGET_FRAMEWORK,
    schema::SUPPORTED_NETSTANDARD_TARGET_FRAMEWORK,
    schema::CONFIGURATION_GENERAL,
];

/// Produces the legal values of `TargetFramework` from evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetFrameworksProvider {
    policy: DisplayNamePolicy,
}

impl TargetFrameworksProvider {
    /// Create a provider with the given display name policy
    #[must_use]
    pub const fn new(policy: DisplayNamePolicy) -> Self {
        Self { policy }
    }

    /// The display name policy in effect
    #[must_use]
    pub const fn policy(&self) -> DisplayNamePolicy {
        self.policy
    }
}

impl ValuesProvider for TargetFrameworksProvider {
    fn rule_names(&self) -> &'static [&'static str] {
        &REQUIRED_RULES
    }

    fn applies_to(&self) -> &'static str {
        schema::DOTNET_CAPABILITY
    }

    fn transform(&self, snapshot: &Snapshot) -> Result<Vec<ValueRecord>, ResolveError> {
        let source = select(snapshot)?;
        let values = resolve_source(snapshot, &source, self.policy)?;
        debug!("resolved {} target framework value(s) from {source}", values.len());
        Ok(values)
    }
}
