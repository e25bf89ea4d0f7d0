//! @acp:module "Manifest Rewrite"
//! @acp:summary "Update project identity fields in package.json"
//! @acp:domain cli
//! @acp:layer io

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Set `name` and `description` on a manifest object. Other keys keep their
/// position; missing keys are appended.
pub fn apply_identity(manifest: &mut Value, path: &Path, name: &str, description: &str) -> Result<()> {
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::InvalidManifest(path.to_path_buf()))?;
    object.insert("name".to_string(), Value::String(name.to_string()));
    object.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );
    Ok(())
}

/// Two-space indented JSON with a trailing newline
pub fn to_manifest_string(manifest: &Value, path: &Path) -> Result<String> {
    let mut content = serde_json::to_string_pretty(manifest).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');
    Ok(content)
}

/// @acp:summary "Rewrite a manifest file in place with a new project identity"
pub async fn rewrite_manifest(path: &Path, name: &str, description: &str) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::io("read", path, e))?;
    let mut manifest: Value = serde_json::from_str(&content).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    apply_identity(&mut manifest, path, name, description)?;

    tokio::fs::write(path, to_manifest_string(&manifest, path)?)
        .await
        .map_err(|e| ScaffoldError::io("write", path, e))?;
    tracing::debug!(path = %path.display(), name, "Manifest rewritten");
    Ok(())
}
