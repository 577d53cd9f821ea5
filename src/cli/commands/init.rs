//! Write a default configuration file

use std::path::Path;

use tfm_values::config::ResolverConfig;
use tfm_values::output::OutputMode;

/// Write the default configuration to `path`, or to the default location
pub fn init(path: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let target = path.map_or_else(ResolverConfig::config_path, Path::to_path_buf);
    if target.exists() && !force {
        if mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({ "success": false, "message": "config already exists", "path": target.display().to_string() })
            );
        } else {
            println!("Already initialized ({} exists).", target.display());
            println!("Use --force to reinitialize.");
        }
        return Ok(());
    }

    let config = ResolverConfig::default();
    path.map_or_else(|| config.save(), |path| config.save_to(path))?;

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({ "success": true, "message": "config written", "path": target.display().to_string() })
        );
    } else {
        println!("Wrote default configuration to {}", target.display());
    }
    Ok(())
}
