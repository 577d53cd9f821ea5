//! Values provider port
//!
//! Defines the interface hosts use to obtain the legal values of an
//! enumerated project property from evaluation snapshots.

use super::super::models::{Snapshot, ValueRecord};
use super::super::services::ResolveError;

/// Source of legal values for one enumerated property
///
/// Hosts subscribe to the rules named by [`rule_names`](Self::rule_names)
/// and hand each new snapshot to [`values`](Self::values). Implementations
/// keep no state between calls.
pub trait ValuesProvider: Send + Sync {
    /// Rules the host must populate in every snapshot
    fn rule_names(&self) -> &'static [&'static str];

    /// Project capability that activates this provider
    fn applies_to(&self) -> &'static str;

    /// Derive the ordered values from a snapshot
    fn transform(&self, snapshot: &Snapshot) -> Result<Vec<ValueRecord>, ResolveError>;

    /// Check the snapshot carries every declared rule, then transform it
    fn values(&self, snapshot: &Snapshot) -> Result<Vec<ValueRecord>, ResolveError> {
        snapshot.require(self.rule_names())?;
        self.transform(snapshot)
    }
}
