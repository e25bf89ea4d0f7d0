//! @acp:module "Scaffold Builder"
//! @acp:summary "Materialize a new example project from the base template"
//! @acp:domain cli
//! @acp:layer service
//!
//! Runs a linear sequence of steps against a fresh target directory:
//!
//! 1. Validate that the target does not exist
//! 2. Copy the base template (skipping excluded paths)
//! 3. Empty the `contracts` and `test` directories
//! 4. Inject `<Template>.sol` into `contracts`
//! 5. Inject `<Template>.ts` into `test`
//! 6. Rewrite the manifest identity
//! 7. Generate the README
//!
//! Missing template halves and a missing title are warnings. Any other
//! failure stops the run and is tagged with its [`Step`]. There is no
//! rollback: a failure after step 1 may leave a partial directory behind.

pub mod fs;
pub mod manifest;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::docs::{generate_docs, DocsOutcome};
use crate::error::{ErrorKind, ScaffoldError};

pub use fs::{copy_tree, empty_dir, is_excluded};
pub use manifest::rewrite_manifest;

/// Pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Validate,
    CopyBase,
    ClearGenerated,
    InjectContract,
    InjectTest,
    RewriteManifest,
    GenerateDocs,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Validate => "validate target",
            Step::CopyBase => "copy base template",
            Step::ClearGenerated => "clear generated directories",
            Step::InjectContract => "inject contract template",
            Step::InjectTest => "inject test template",
            Step::RewriteManifest => "rewrite manifest",
            Step::GenerateDocs => "generate documentation",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "A failed scaffolding run and the step it failed in"
#[derive(Debug, Error)]
#[error("Failed to {step}")]
pub struct ScaffoldFailure {
    pub step: Step,
    #[source]
    pub error: ScaffoldError,
}

impl ScaffoldFailure {
    pub fn new(step: Step, error: ScaffoldError) -> Self {
        Self { step, error }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// True if the target directory may have been written to
    pub fn is_partial(&self) -> bool {
        self.step > Step::Validate
    }
}

/// Tag a step's error with the step
trait AtStep<T> {
    fn at(self, step: Step) -> Result<T, ScaffoldFailure>;
}

impl<T> AtStep<T> for crate::error::Result<T> {
    fn at(self, step: Step) -> Result<T, ScaffoldFailure> {
        self.map_err(|error| ScaffoldFailure::new(step, error))
    }
}

/// Non-fatal conditions met during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Registry has no contract half for the template
    MissingContractTemplate(PathBuf),
    /// Registry has no test half for the template
    MissingTestTemplate(PathBuf),
    /// No contract carried `@title`; README was not written
    NoTitle,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MissingContractTemplate(path) => write!(
                f,
                "Template {} not found. Contracts directory is empty.",
                file_name(path)
            ),
            Warning::MissingTestTemplate(path) => {
                write!(f, "Test template {} not found.", file_name(path))
            }
            Warning::NoTitle => write!(f, "No @title found in contracts. Skipping README generation."),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// @acp:summary "Named contract/test pair in the template registry"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    /// `<registry>/<name>.<source ext>`
    pub source: PathBuf,
    /// `<registry>/<name>.<test ext>`
    pub test: PathBuf,
}

/// @acp:summary "Destination of a new project"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub name: String,
    pub path: PathBuf,
}

/// @acp:summary "Summary of a successful scaffolding run"
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub target: ProjectTarget,
    pub template: TemplateRef,
    /// Files copied from the base template
    pub copied_files: usize,
    /// Template files placed into the project
    pub injected: Vec<PathBuf>,
    pub warnings: Vec<Warning>,
    pub docs: DocsOutcome,
}

/// @acp:summary "Scaffolding pipeline bound to a workspace configuration"
#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: Config,
}

impl Scaffolder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn target_for(&self, name: &str) -> ProjectTarget {
        ProjectTarget {
            name: name.to_string(),
            path: self.config.root.join(name),
        }
    }

    pub fn template(&self, name: &str) -> TemplateRef {
        let registry = self.config.templates_path();
        TemplateRef {
            name: name.to_string(),
            source: registry.join(format!("{}.{}", name, self.config.source_extension)),
            test: registry.join(format!("{}.{}", name, self.config.test_extension)),
        }
    }

    /// @acp:summary "Create a new project directory from a template"
    /// @acp:ai-careful "Writes to disk; no rollback on failure"
    pub async fn create(
        &self,
        name: &str,
        template: Option<&str>,
    ) -> Result<ScaffoldReport, ScaffoldFailure> {
        let template = self.template(template.unwrap_or(self.config.default_template.as_str()));
        let target = self.target_for(name);
        let mut warnings = Vec::new();
        let mut injected = Vec::new();

        tracing::info!(
            name,
            template = %template.name,
            target = %target.path.display(),
            "Creating new example"
        );

        // 1. Target must not exist
        let exists = tokio::fs::try_exists(&target.path)
            .await
            .map_err(|e| ScaffoldError::io("inspect", &target.path, e))
            .at(Step::Validate)?;
        if exists {
            return Err(ScaffoldFailure::new(
                Step::Validate,
                ScaffoldError::TargetExists(target.path.clone()),
            ));
        }

        // 2. Copy base template
        tracing::info!("Copying base template");
        let copied_files = copy_tree(
            &self.config.base_template_path(),
            &target.path,
            &self.config.exclude,
        )
        .await
        .at(Step::CopyBase)?;

        // 3. Clear default contracts and tests
        tracing::info!("Cleaning up default files");
        let contracts_dir = target.path.join(&self.config.contracts_dir);
        let test_dir = target.path.join(&self.config.test_dir);
        empty_dir(&contracts_dir).await.at(Step::ClearGenerated)?;
        empty_dir(&test_dir).await.at(Step::ClearGenerated)?;

        // 4. Contract half
        match inject(&template.source, &contracts_dir)
            .await
            .at(Step::InjectContract)?
        {
            Some(path) => injected.push(path),
            None => warnings.push(Warning::MissingContractTemplate(template.source.clone())),
        }

        // 5. Test half
        match inject(&template.test, &test_dir).await.at(Step::InjectTest)? {
            Some(path) => injected.push(path),
            None => warnings.push(Warning::MissingTestTemplate(template.test.clone())),
        }

        // 6. Manifest identity
        tracing::info!("Updating {}", self.config.manifest_file);
        rewrite_manifest(
            &target.path.join(&self.config.manifest_file),
            name,
            &self.config.description_for(name),
        )
        .await
        .at(Step::RewriteManifest)?;

        // 7. README
        let docs = generate_docs(&target.path, &self.config)
            .await
            .at(Step::GenerateDocs)?;
        if docs == DocsOutcome::Skipped {
            warnings.push(Warning::NoTitle);
        }

        for warning in &warnings {
            if *warning != Warning::NoTitle {
                tracing::warn!("{}", warning);
            }
        }

        Ok(ScaffoldReport {
            target,
            template,
            copied_files,
            injected,
            warnings,
            docs,
        })
    }
}

/// Copy a template file into `dir`, keeping its name. `None` if it does not exist.
async fn inject(template: &Path, dir: &Path) -> crate::error::Result<Option<PathBuf>> {
    let present = tokio::fs::try_exists(template)
        .await
        .map_err(|e| ScaffoldError::io("inspect", template, e))?;
    let Some(file_name) = template.file_name().filter(|_| present) else {
        return Ok(None);
    };

    let destination = dir.join(file_name);
    tokio::fs::copy(template, &destination)
        .await
        .map_err(|e| ScaffoldError::io("copy", template, e))?;
    tracing::info!(file = %destination.display(), "Injected template");
    Ok(Some(destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_paths() {
        let scaffolder = Scaffolder::new(Config::with_root("/work"));
        let template = scaffolder.template("FHEVoting");
        assert_eq!(
            template.source,
            PathBuf::from("/work/automation/templates/FHEVoting.sol")
        );
        assert_eq!(
            template.test,
            PathBuf::from("/work/automation/templates/FHEVoting.ts")
        );
    }

    #[test]
    fn test_target_for() {
        let scaffolder = Scaffolder::new(Config::with_root("/work"));
        let target = scaffolder.target_for("my-vote");
        assert_eq!(target.name, "my-vote");
        assert_eq!(target.path, PathBuf::from("/work/my-vote"));
    }

    #[test]
    fn test_step_order_and_partial() {
        assert!(Step::Validate < Step::CopyBase);
        assert!(Step::RewriteManifest < Step::GenerateDocs);

        let refused = ScaffoldFailure::new(
            Step::Validate,
            ScaffoldError::TargetExists(PathBuf::from("x")),
        );
        assert!(!refused.is_partial());
        assert_eq!(refused.kind(), ErrorKind::Precondition);

        let partial = ScaffoldFailure::new(
            Step::RewriteManifest,
            ScaffoldError::InvalidManifest(PathBuf::from("x/package.json")),
        );
        assert!(partial.is_partial());
        assert!(partial.to_string().starts_with("Failed to rewrite manifest"));
    }

    #[test]
    fn test_warning_messages() {
        let warning = Warning::MissingContractTemplate(PathBuf::from("/t/Foo.sol"));
        assert_eq!(
            warning.to_string(),
            "Template Foo.sol not found. Contracts directory is empty."
        );
        let warning = Warning::MissingTestTemplate(PathBuf::from("/t/Foo.ts"));
        assert_eq!(warning.to_string(), "Test template Foo.ts not found.");
    }
}
