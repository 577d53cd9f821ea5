//! Business logic services
//!
//! Pure transformation logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! snapshots passed in and return results.
//!
//! - [`selector`] - Pick the rule holding the supported values
//! - [`transformer`] - Turn rule items into value records
//! - [`ordering`] - Natural ordering of display labels
//! - [`fallback`] - Synthesize a value missing from every list
//! - [`resolver`] - The select, transform, order pipeline
//! - [`target_frameworks`] - The `TargetFramework` values provider

pub mod fallback;
pub mod ordering;
pub mod resolver;
pub mod selector;
pub mod target_frameworks;
pub mod transformer;

pub use fallback::synthesize;
pub use ordering::{natural_cmp, sort_records};
pub use resolver::{ResolveError, resolve, resolve_source};
pub use selector::{ResolvedSource, select};
pub use target_frameworks::{REQUIRED_RULES, TargetFrameworksProvider};
pub use transformer::{TransformError, to_record, to_records};
