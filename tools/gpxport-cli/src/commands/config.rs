//! Show or save the effective configuration.

use gpxport_common::config::{config_file_path, AppConfig};

pub fn run(config: AppConfig, write: bool) -> anyhow::Result<()> {
    println!("# {}", config_file_path().display());
    println!("{}", serde_json::to_string_pretty(&config)?);

    if write {
        let path = config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to save config: {e}"))?;
        println!("\nSaved configuration to {}", path.display());
    }

    Ok(())
}
