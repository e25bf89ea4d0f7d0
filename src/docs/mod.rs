//! @acp:module "Docs"
//! @acp:summary "README generation from contract and test annotations"
//! @acp:domain docs
//! @acp:layer service
//!
//! Runs the merger over a project directory and writes the rendered README.
//! A project without any `@title` in its contracts gets no README; that is
//! reported as [`DocsOutcome::Skipped`], not as an error.

pub mod merger;
pub mod renderer;

use std::path::{Path, PathBuf};

pub use merger::{collect_metadata, list_files_with_extension, DocumentModel};
pub use renderer::{render_readme, unique_descriptions};

use crate::config::Config;
use crate::error::{Result, ScaffoldError};

/// Result of a documentation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsOutcome {
    /// README written at this path
    Written(PathBuf),
    /// No contract carried a title
    Skipped,
}

impl DocsOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, DocsOutcome::Written(_))
    }
}

/// @acp:summary "Generate the README for a project directory"
pub async fn generate_docs(project_dir: &Path, config: &Config) -> Result<DocsOutcome> {
    tracing::info!(dir = %project_dir.display(), "Generating documentation");

    let model = collect_metadata(project_dir, config).await?;

    let Some(markdown) = render_readme(&model) else {
        tracing::warn!("No @title found in contracts. Skipping README generation.");
        return Ok(DocsOutcome::Skipped);
    };

    let readme_path = project_dir.join(&config.readme_file);
    tokio::fs::write(&readme_path, markdown)
        .await
        .map_err(|e| ScaffoldError::io("write", &readme_path, e))?;

    tracing::info!(path = %readme_path.display(), "README generated");
    Ok(DocsOutcome::Written(readme_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate_docs_overwrites_readme() {
        let temp = TempDir::new().unwrap();
        let contracts = temp.path().join("contracts");
        std::fs::create_dir_all(&contracts).unwrap();
        std::fs::write(contracts.join("Value.sol"), "// @title Encrypted Value\n").unwrap();
        std::fs::write(temp.path().join("README.md"), "old content that is long").unwrap();

        let outcome = generate_docs(temp.path(), &Config::default()).await.unwrap();
        assert_eq!(outcome, DocsOutcome::Written(temp.path().join("README.md")));

        let content = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(content.starts_with("# Encrypted Value\n"));
        assert!(!content.contains("old content"));
    }

    #[tokio::test]
    async fn test_generate_docs_skips_without_title() {
        let temp = TempDir::new().unwrap();
        let tests = temp.path().join("test");
        std::fs::create_dir_all(&tests).unwrap();
        std::fs::write(tests.join("Value.ts"), "// @title Test titles do not count\n").unwrap();

        let outcome = generate_docs(temp.path(), &Config::default()).await.unwrap();
        assert_eq!(outcome, DocsOutcome::Skipped);
        assert!(!outcome.is_written());
        assert!(!temp.path().join("README.md").exists());
    }
}
