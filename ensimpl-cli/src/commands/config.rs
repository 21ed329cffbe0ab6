//! Config command implementation - show or write configuration

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub fn execute(config: &Config, example: bool, write: Option<&Path>) -> Result<()> {
    if let Some(path) = write {
        let target = if example { Config::default() } else { config.clone() };
        target.save_to_file(path)?;
        log::info!("Configuration written to: {}", path.display());
        return Ok(());
    }

    let content = if example {
        Config::example_toml()?
    } else {
        toml::to_string_pretty(config)?
    };
    print!("{}", content);
    Ok(())
}
