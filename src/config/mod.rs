//! @acp:module "Configuration"
//! @acp:summary "Scaffolding workspace layout and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "scaffold.config.json";

/// @acp:summary "Main scaffolding configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Workspace root; new projects are created as `<root>/<name>`
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Project skeleton, relative to root
    #[serde(default = "default_base_template")]
    pub base_template: PathBuf,

    /// Template registry, relative to root
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Template used when none is selected
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Extension of structured-source (contract) files
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of test-script files
    #[serde(default = "default_test_extension")]
    pub test_extension: String,

    #[serde(default = "default_contracts_dir")]
    pub contracts_dir: String,

    #[serde(default = "default_test_dir")]
    pub test_dir: String,

    /// Per-project descriptor rewritten after copy
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Generated document name at the project root
    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// Path fragments skipped while copying the skeleton (substring match)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Manifest description; `{name}` is replaced by the project name
    #[serde(default = "default_description_template")]
    pub description_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            base_template: default_base_template(),
            templates_dir: default_templates_dir(),
            default_template: default_template(),
            source_extension: default_source_extension(),
            test_extension: default_test_extension(),
            contracts_dir: default_contracts_dir(),
            test_dir: default_test_dir(),
            manifest_file: default_manifest_file(),
            readme_file: default_readme_file(),
            exclude: default_exclude(),
            description_template: default_description_template(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::io("read config", path, e))?;
        serde_json::from_str(&content).map_err(|source| ScaffoldError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| ScaffoldError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|e| ScaffoldError::io("write config", path, e))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    /// A config file that exists but cannot be read is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Config rooted at `root` with every other field defaulted
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn base_template_path(&self) -> PathBuf {
        self.root.join(&self.base_template)
    }

    pub fn templates_path(&self) -> PathBuf {
        self.root.join(&self.templates_dir)
    }

    /// Manifest description for a project
    pub fn description_for(&self, name: &str) -> String {
        self.description_template.replace("{name}", name)
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_template() -> PathBuf {
    PathBuf::from("base-template")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("automation/templates")
}

fn default_template() -> String {
    "EncryptedValue".to_string()
}

fn default_source_extension() -> String {
    "sol".to_string()
}

fn default_test_extension() -> String {
    "ts".to_string()
}

fn default_contracts_dir() -> String {
    "contracts".to_string()
}

fn default_test_dir() -> String {
    "test".to_string()
}

fn default_manifest_file() -> String {
    "package.json".to_string()
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![
        // Package managers
        "node_modules".to_string(),
        // VCS
        ".git".to_string(),
    ]
}

fn default_description_template() -> String {
    "FHEVM Example: {name}".to_string()
}
