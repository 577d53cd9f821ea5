//! Resolution pipeline - select, transform, order
//!
//! A pure function of the snapshot: the same snapshot always resolves to the
//! same values in the same order.

use thiserror::Error;

use super::fallback::synthesize;
use super::ordering::sort_records;
use super::selector::{ResolvedSource, select};
use super::transformer::{TransformError, to_records};
use crate::core::models::{DisplayNamePolicy, Snapshot, SnapshotError, ValueRecord};

/// Errors raised while resolving supported values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The snapshot violates its contract
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// An item could not be turned into a value
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Resolve the ordered supported values for a snapshot
///
/// # Errors
///
/// Returns [`ResolveError::Snapshot`] if a rule the selection depends on is
/// missing, and [`ResolveError::Transform`] if an item is rejected under
/// `policy`.
pub fn resolve(snapshot: &Snapshot, policy: DisplayNamePolicy) -> Result<Vec<ValueRecord>, ResolveError> {
    resolve_source(snapshot, &select(snapshot)?, policy)
}

/// Produce the values for an already selected source
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_source(
    snapshot: &Snapshot,
    source: &ResolvedSource,
    policy: DisplayNamePolicy,
) -> Result<Vec<ValueRecord>, ResolveError> {
    match source {
        ResolvedSource::NamedRule(family) => {
            let table = snapshot.rule(family.rule_name())?;
            Ok(sort_records(to_records(table, policy)?))
        },
        ResolvedSource::ScalarFallback {
            value,
            moniker,
            display_hint,
        } => Ok(synthesize(value, moniker.as_deref(), display_hint.as_deref())),
        ResolvedSource::Empty => Ok(Vec::new()),
    }
}
