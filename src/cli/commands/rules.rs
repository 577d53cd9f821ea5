//! List the rules a snapshot must carry

use tfm_values::core::ports::ValuesProvider;
use tfm_values::core::services::TargetFrameworksProvider;
use tfm_values::output::{OutputMode, RulesResult};

/// Print the rules required by the target framework provider
pub fn rules(mode: OutputMode) -> anyhow::Result<()> {
    let provider = TargetFrameworksProvider::default();
    let result = RulesResult {
        applies_to: provider.applies_to().to_string(),
        rules: provider.rule_names().iter().map(ToString::to_string).collect(),
    };
    result.render(mode);
    Ok(())
}
