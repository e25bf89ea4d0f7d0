//! @acp:module "Metadata Merger"
//! @acp:summary "Compose per-file annotation records into one document model"
//! @acp:domain docs
//! @acp:layer service
//!
//! Contract files win: title and chapter come only from contracts, first
//! file with a value wins. Descriptions come from contracts then tests.
//! Pitfalls come only from tests.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::parse::{AnnotationRecord, Parser};

/// @acp:summary "Merged documentation model for one project"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentModel {
    pub title: Option<String>,
    /// All fragments in accumulation order; duplicates are removed at render time
    pub description: Vec<String>,
    pub chapter: Option<String>,
    pub pitfalls: Vec<String>,
}

impl DocumentModel {
    /// Fold a contract file's record. Its pitfalls and example are not used.
    pub fn absorb_contract(&mut self, record: AnnotationRecord) {
        if self.title.is_none() {
            self.title = record.title.filter(|t| !t.is_empty());
        }
        self.description.extend(record.description);
        if self.chapter.is_none() {
            self.chapter = record.chapter.filter(|c| !c.is_empty());
        }
    }

    /// Fold a test file's record. Its title, chapter and example are not used.
    pub fn absorb_test(&mut self, record: AnnotationRecord) {
        self.pitfalls.extend(record.pitfalls);
        self.description.extend(record.description);
    }
}

/// @acp:summary "Collect and merge annotations under a project directory"
/// Missing `contracts`/`test` directories are skipped.
pub async fn collect_metadata(project_dir: &Path, config: &Config) -> Result<DocumentModel> {
    let parser = Parser::new();
    let mut model = DocumentModel::default();

    let contracts_dir = project_dir.join(&config.contracts_dir);
    for file in list_files_with_extension(&contracts_dir, &config.source_extension).await? {
        let record = parser.parse(&file).await?;
        model.absorb_contract(record);
    }

    let tests_dir = project_dir.join(&config.test_dir);
    for file in list_files_with_extension(&tests_dir, &config.test_extension).await? {
        let record = parser.parse(&file).await?;
        model.absorb_test(record);
    }

    Ok(model)
}

/// @acp:summary "List regular files with an extension, sorted by file name"
/// A missing directory yields an empty list.
pub async fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !tokio::fs::try_exists(dir)
        .await
        .map_err(|e| ScaffoldError::io("inspect", dir, e))?
    {
        tracing::debug!(dir = %dir.display(), "Directory not found, skipping");
        return Ok(Vec::new());
    }

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io("list", dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io("list", dir, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ScaffoldError::io("inspect", &path, e))?;
        if !file_type.is_dir() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: Option<&str>, chapter: Option<&str>) -> AnnotationRecord {
        AnnotationRecord {
            title: title.map(String::from),
            chapter: chapter.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_contract_title_wins() {
        let mut model = DocumentModel::default();
        model.absorb_contract(record(Some("First"), None));
        model.absorb_contract(record(Some("Second"), None));
        assert_eq!(model.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_title_from_later_contract_when_first_has_none() {
        let mut model = DocumentModel::default();
        model.absorb_contract(record(None, None));
        model.absorb_contract(record(Some("Second"), None));
        assert_eq!(model.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_empty_title_does_not_count() {
        let mut model = DocumentModel::default();
        model.absorb_contract(record(Some(""), Some("")));
        model.absorb_contract(record(Some("Real"), Some("Basics")));
        assert_eq!(model.title.as_deref(), Some("Real"));
        assert_eq!(model.chapter.as_deref(), Some("Basics"));
    }

    #[test]
    fn test_first_contract_chapter_wins() {
        let mut model = DocumentModel::default();
        model.absorb_contract(record(None, Some("Basics")));
        model.absorb_contract(record(None, Some("Advanced")));
        assert_eq!(model.chapter.as_deref(), Some("Basics"));
    }

    #[test]
    fn test_tests_never_set_title_or_chapter() {
        let mut model = DocumentModel::default();
        model.absorb_test(record(Some("Test title"), Some("Test chapter")));
        assert_eq!(model.title, None);
        assert_eq!(model.chapter, None);
    }

    #[test]
    fn test_pitfalls_only_from_tests() {
        let mut model = DocumentModel::default();
        model.absorb_contract(AnnotationRecord {
            pitfalls: vec!["P1".to_string()],
            ..Default::default()
        });
        model.absorb_test(AnnotationRecord {
            pitfalls: vec!["P2".to_string(), "P2".to_string()],
            ..Default::default()
        });
        assert_eq!(model.pitfalls, vec!["P2", "P2"]);
    }

    #[test]
    fn test_descriptions_contracts_then_tests() {
        let mut model = DocumentModel::default();
        model.absorb_test(AnnotationRecord {
            description: vec!["from test".to_string()],
            ..Default::default()
        });
        model.absorb_contract(AnnotationRecord {
            description: vec!["from contract".to_string()],
            ..Default::default()
        });
        // Order follows absorption; collect_metadata absorbs all contracts first
        assert_eq!(model.description, vec!["from test", "from contract"]);
    }

    #[tokio::test]
    async fn test_list_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.sol"), "").unwrap();
        std::fs::write(temp.path().join("a.sol"), "").unwrap();
        std::fs::write(temp.path().join("notes.md"), "").unwrap();
        std::fs::create_dir(temp.path().join("nested.sol")).unwrap();

        let files = list_files_with_extension(temp.path(), "sol").await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.sol", "b.sol"]);
    }

    #[tokio::test]
    async fn test_list_files_missing_dir() {
        let temp = TempDir::new().unwrap();
        let files = list_files_with_extension(&temp.path().join("contracts"), "sol")
            .await
            .unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_collect_metadata_merges_both_dirs() {
        let temp = TempDir::new().unwrap();
        let contracts = temp.path().join("contracts");
        let tests = temp.path().join("test");
        std::fs::create_dir_all(&contracts).unwrap();
        std::fs::create_dir_all(&tests).unwrap();

        std::fs::write(
            contracts.join("Counter.sol"),
            "/// @title FHE Counter\n/// @chapter Basics\n/// @description Counts.\n/// @pitfall Ignored\n",
        )
        .unwrap();
        std::fs::write(
            tests.join("Counter.ts"),
            "// @title Ignored title\n// @description Tested.\n// @pitfall Check ACL\n",
        )
        .unwrap();

        let model = collect_metadata(temp.path(), &Config::default())
            .await
            .unwrap();
        assert_eq!(model.title.as_deref(), Some("FHE Counter"));
        assert_eq!(model.chapter.as_deref(), Some("Basics"));
        assert_eq!(model.description, vec!["Counts.", "Tested."]);
        assert_eq!(model.pitfalls, vec!["Check ACL"]);
    }

    #[tokio::test]
    async fn test_collect_metadata_empty_project() {
        let temp = TempDir::new().unwrap();
        let model = collect_metadata(temp.path(), &Config::default())
            .await
            .unwrap();
        assert_eq!(model, DocumentModel::default());
    }
}
