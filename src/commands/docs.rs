//! @acp:module "Docs Command"
//! @acp:summary "Regenerate the README of an existing project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `fhevm-scaffold docs [dir]`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::docs::{generate_docs, DocsOutcome};

/// Options for the docs command
#[derive(Debug, Clone)]
pub struct DocsOptions {
    /// Project directory to document
    pub dir: PathBuf,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Execute the docs command
pub async fn execute_docs(options: DocsOptions, config: &Config) -> Result<DocsOutcome> {
    println!(
        "{} Generating documentation for: {}",
        style("→").cyan(),
        options.dir.display()
    );

    let outcome = generate_docs(&options.dir, config).await?;
    match &outcome {
        DocsOutcome::Written(path) => {
            println!("{} {} generated successfully", style("✓").green(), path.display());
        }
        DocsOutcome::Skipped => {
            eprintln!(
                "{} No @title found in contracts. Skipping README generation.",
                style("⚠").yellow()
            );
        }
    }

    Ok(outcome)
}
