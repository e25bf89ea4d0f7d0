//! @acp:module "Create Command"
//! @acp:summary "Scaffold a new example project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `fhevm-scaffold create <name> [--template <Name>]`.

use console::style;

use crate::config::Config;
use crate::docs::DocsOutcome;
use crate::scaffold::{ScaffoldFailure, ScaffoldReport, Scaffolder};

/// Options for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// New project name (also the target directory name)
    pub name: String,
    /// Template selector; the configured default when absent
    pub template: Option<String>,
}

/// Execute the create command
pub async fn execute_create(
    options: CreateOptions,
    config: Config,
) -> Result<ScaffoldReport, ScaffoldFailure> {
    let scaffolder = Scaffolder::new(config);
    let template_name = options
        .template
        .clone()
        .unwrap_or_else(|| scaffolder.config().default_template.clone());
    let target = scaffolder.target_for(&options.name);

    println!("{} Creating new example: {}", style("→").cyan(), style(&options.name).bold());
    println!("  Template: {}", template_name);
    println!("  Source: {}", scaffolder.config().base_template_path().display());
    println!("  Target: {}", target.path.display());

    let report = scaffolder
        .create(&options.name, options.template.as_deref())
        .await?;

    print_report(&report);
    Ok(report)
}

fn print_report(report: &ScaffoldReport) {
    println!(
        "{} Copied base template ({} files)",
        style("✓").green(),
        report.copied_files
    );
    for path in &report.injected {
        println!("{} Injected {}", style("✓").green(), path.display());
    }
    for warning in &report.warnings {
        eprintln!("{} Warning: {}", style("⚠").yellow(), warning);
    }
    if let DocsOutcome::Written(path) = &report.docs {
        println!("{} {} generated", style("✓").green(), path.display());
    }

    println!(
        "\n{} Example '{}' created successfully!",
        style("✓").green(),
        report.target.name
    );
    println!("\n{}", style("Next steps:").bold());
    println!("  {}", style(format!("cd {}", report.target.path.display())).cyan());
    println!("  {}", style("npm install").cyan());
    println!("  {}", style("npx hardhat test").cyan());
}
