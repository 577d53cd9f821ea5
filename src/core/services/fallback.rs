//! Fallback synthesis for frameworks missing from every supported list
//!
//! Evaluation can report a valid framework that no supported list contains
//! yet, for example one released after the SDK. The current value is still
//! offered so the selection shown to the user stays consistent.

use log::debug;

use crate::core::models::ValueRecord;

/// Build the single-record result for an unlisted current value
///
/// The record is named by `moniker` when present and labelled by
/// `display_hint` when present; otherwise `value` is used for both. An empty
/// `value` produces no records.
#[must_use]
pub fn synthesize(value: &str, moniker: Option<&str>, display_hint: Option<&str>) -> Vec<ValueRecord> {
    if value.is_empty() {
        return Vec::new();
    }

    let name = moniker.filter(|m| !m.is_empty()).unwrap_or(value);
    let display_name = display_hint.filter(|d| !d.is_empty()).unwrap_or(value);

    debug!("synthesized fallback value {name} ({display_name})");
    vec![ValueRecord::new(name, display_name)]
}
