//! Binary exit-code tests
//!
//! Runs the built `fhevm-scaffold` executable in a temp workspace.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fhevm-scaffold"))
        .args(args)
        .current_dir(cwd)
        .env_remove("FHEVM_SCAFFOLD_ROOT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// =============================================================================
// Exit codes
// =============================================================================

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_skipped_docs_exit_zero() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("contracts")).unwrap();
        std::fs::write(temp.path().join("contracts/X.sol"), "contract X {}\n").unwrap();

        let output = run(temp.path(), &["docs", "."]);

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stderr).contains("No @title found"));
        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn test_existing_target_exits_one() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("taken")).unwrap();
        let root = temp.path().to_string_lossy().to_string();

        let output = run(temp.path(), &["--root", &root, "create", "taken"]);

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to validate target"));
        assert!(stderr.contains("already exists"));
    }

    #[test]
    fn test_missing_name_exits_two() {
        let temp = TempDir::new().unwrap();

        let output = run(temp.path(), &["create"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_init_refuses_second_run() {
        let temp = TempDir::new().unwrap();

        let first = run(temp.path(), &["init"]);
        assert_eq!(first.status.code(), Some(0));
        assert!(temp.path().join("scaffold.config.json").exists());

        let second = run(temp.path(), &["init"]);
        assert_eq!(second.status.code(), Some(1));

        let forced = run(temp.path(), &["init", "--force"]);
        assert_eq!(forced.status.code(), Some(0));
    }
}
