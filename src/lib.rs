#![forbid(unsafe_code)]

//! @acp:module "fhevm-scaffold Library"
//! @acp:summary "Scaffold FHEVM example projects and document them from annotations"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # fhevm-scaffold
//!
//! Creates standalone example projects from a base template plus a named
//! contract/test template pair, then writes a README composed from the
//! `@title`, `@description`, `@chapter` and `@pitfall` comments found in the
//! injected files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fhevm_scaffold::{Config, Scaffolder};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scaffolder = Scaffolder::new(Config::default());
//!     let report = scaffolder.create("my-counter", Some("FHEArithmetic")).await?;
//!
//!     for warning in &report.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod docs;
pub mod error;
pub mod parse;
pub mod scaffold;

// Re-exports
pub use config::Config;
pub use docs::{generate_docs, DocsOutcome, DocumentModel};
pub use error::{ErrorKind, Result, ScaffoldError};
pub use parse::{AnnotationRecord, Parser, Tag};
pub use scaffold::{
    ProjectTarget, ScaffoldFailure, ScaffoldReport, Scaffolder, Step, TemplateRef, Warning,
};
