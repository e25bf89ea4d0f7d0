//! @acp:module "Init Command"
//! @acp:summary "Write a default workspace config"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `fhevm-scaffold init [--force]`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::{Config, CONFIG_FILE};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
            force: false,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions, config: &Config) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    config.save(&options.path)?;
    println!("{} Created {}", style("✓").green(), options.path.display());
    println!("  Base template: {}", config.base_template_path().display());
    println!("  Templates: {}", config.templates_path().display());

    Ok(())
}
