//! Configuration display command

use anyhow::{Context, Result};
use pennywise_core::config::default_config_path;
use pennywise_core::{Config, ConfigOrigin};

pub fn cmd_config(config: &Config, origin: &ConfigOrigin) -> Result<()> {
    println!("⚙️  Configuration");
    println!("   Source: {}", origin);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!("   ─────────────────────────────────────────────────────────────");

    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    for line in rendered.lines() {
        println!("   {}", line);
    }

    Ok(())
}
