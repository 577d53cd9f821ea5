//! Compare two labels in natural order

use std::cmp::Ordering;

use tfm_values::core::services::natural_cmp;
use tfm_values::output::{CompareResult, OutputMode};

/// Print how `left` orders against `right`
pub fn compare(left: &str, right: &str, mode: OutputMode) -> anyhow::Result<()> {
    let ordering = match natural_cmp(left, right) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    let result = CompareResult {
        left: left.to_string(),
        right: right.to_string(),
        ordering: ordering.to_string(),
    };
    result.render(mode);
    Ok(())
}
