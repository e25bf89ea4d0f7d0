//! @acp:module "Errors"
//! @acp:summary "Tagged error kinds for the scaffolding pipeline"
//! @acp:domain cli
//! @acp:layer core
//!
//! Errors are split by kind so that callers embedding the pipeline can tell
//! a refused run apart from one that failed after writing to disk.
//! Missing optional assets are not errors; see [`crate::scaffold::Warning`].

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition was not met; nothing was written
    Precondition,
    /// Filesystem operation failed
    Io,
    /// A manifest or config document could not be parsed
    Parse,
}

/// @acp:summary "Library error type"
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory {} already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} is not a JSON object", .0.display())]
    InvalidManifest(PathBuf),

    #[error("Directory walk failed")]
    Walk(#[from] walkdir::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error with the action and path it concerns
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::TargetExists(_) => ErrorKind::Precondition,
            ScaffoldError::Io { .. } | ScaffoldError::Walk(_) => ErrorKind::Io,
            ScaffoldError::Json { .. } | ScaffoldError::InvalidManifest(_) => ErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
