//! Domain models for tfm-values
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Snapshot`] - Named rules observed from project evaluation
//! - [`ValueRecord`] - A candidate value with its display label
//! - [`FrameworkFamily`] - Which rule lists the supported frameworks
//! - [`DisplayNamePolicy`] - How to treat items without a label
//! - [`HierarchyId`] - Identifier of a node in a project hierarchy
//! - [`schema`] - Rule and property names

mod family;
mod hierarchy_id;
mod policy;
pub mod schema;
mod snapshot;
mod value;

pub use family::{FamilyParseError, FrameworkFamily};
pub use hierarchy_id::HierarchyId;
pub use policy::DisplayNamePolicy;
pub use snapshot::{Properties, RuleItem, RuleTable, Snapshot, SnapshotError};
pub use value::ValueRecord;
