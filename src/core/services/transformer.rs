//! Value transformer - turns rule items into value records
//!
//! The item key becomes the record name untouched; project storage persists
//! it verbatim, so no trimming or case changes are applied.

use log::{trace, warn};
use thiserror::Error;

use crate::core::models::{DisplayNamePolicy, RuleItem, RuleTable, ValueRecord, schema};

/// Errors raised while transforming rule items
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The item declares no `DisplayName` property
    #[error("item '{item}' has no DisplayName property")]
    MissingDisplayName {
        /// Key of the offending item
        item: String,
    },
}

/// Convert one rule item into a value record
///
/// # Errors
///
/// Under [`DisplayNamePolicy::Strict`], returns
/// [`TransformError::MissingDisplayName`] when the item has no label.
pub fn to_record(item: &RuleItem, policy: DisplayNamePolicy) -> Result<ValueRecord, TransformError> {
    let display_name = match (item.property(schema::DISPLAY_NAME), policy) {
        (Some(label), _) => label,
        (None, DisplayNamePolicy::Lenient) => {
            warn!("supported framework {} has no {}, using its key", item.key, schema::DISPLAY_NAME);
            item.key.as_str()
        },
        (None, DisplayNamePolicy::Strict) => {
            return Err(TransformError::MissingDisplayName {
                item: item.key.clone(),
            });
        },
    };

    trace!("{} => {display_name}", item.key);
    Ok(ValueRecord::new(item.key.as_str(), display_name))
}

/// Convert every item of a rule, in source order
///
/// # Errors
///
/// Fails on the first item [`to_record`] rejects.
pub fn to_records(
    table: &RuleTable,
    policy: DisplayNamePolicy,
) -> Result<Vec<ValueRecord>, TransformError> {
    table.items().iter().map(|item| to_record(item, policy)).collect()
}
