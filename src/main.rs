#![forbid(unsafe_code)]
//! fhevm-scaffold Command Line Interface

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhevm_scaffold::commands::{
    execute_create, execute_docs, execute_init, CreateOptions, DocsOptions, InitOptions,
};
use fhevm_scaffold::config::CONFIG_FILE;
use fhevm_scaffold::Config;

#[derive(Parser)]
#[command(name = "fhevm-scaffold")]
#[command(about = "Scaffold standalone FHEVM example projects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Workspace root (overrides the config file)
    #[arg(long, global = true, env = "FHEVM_SCAFFOLD_ROOT")]
    root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new example project from a template
    Create {
        /// Project name (directory created under the workspace root)
        name: String,

        /// Template name in the template registry
        #[arg(long)]
        template: Option<String>,
    },

    /// Generate README.md for an existing project
    Docs {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "fhevm_scaffold=debug" } else { "error" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    // Diagnostics go to stderr; stdout carries progress output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("✗").red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // init writes the file that would otherwise be loaded
    let mut config = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_or_default(&cli.config)?,
    };
    if let Some(root) = cli.root {
        config.root = root;
    }

    match cli.command {
        Commands::Create { name, template } => {
            let options = CreateOptions { name, template };
            execute_create(options, config).await?;
        }

        Commands::Docs { dir } => {
            let options = DocsOptions { dir };
            execute_docs(options, &config).await?;
        }

        Commands::Init { force } => {
            let options = InitOptions {
                path: cli.config,
                force,
            };
            execute_init(options, &config)?;
        }
    }

    Ok(())
}
