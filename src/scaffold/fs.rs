//! @acp:module "Scaffold Filesystem"
//! @acp:summary "Recursive copy with exclusions and directory emptying"
//! @acp:domain cli
//! @acp:layer io

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

/// True if the path (relative to the copy root) contains any exclusion fragment.
/// Plain substring match: `.git` also excludes `.github` and `.gitignore`.
pub fn is_excluded(relative: &Path, excludes: &[String]) -> bool {
    let path = relative.to_string_lossy();
    excludes
        .iter()
        .any(|fragment| !fragment.is_empty() && path.contains(fragment.as_str()))
}

/// @acp:summary "Recursively copy a directory tree, skipping excluded paths"
/// Returns the number of files and links copied. Excluded directories are not
/// descended. Symlinks are recreated with the same link text, never followed.
pub async fn copy_tree(src: &Path, dst: &Path, excludes: &[String]) -> Result<usize> {
    if !tokio::fs::metadata(src)
        .await
        .map_err(|e| ScaffoldError::io("read", src, e))?
        .is_dir()
    {
        return Err(ScaffoldError::io(
            "read",
            src,
            std::io::Error::other("not a directory"),
        ));
    }

    tokio::fs::create_dir_all(dst)
        .await
        .map_err(|e| ScaffoldError::io("create", dst, e))?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
            !is_excluded(relative, excludes)
        });

    let mut copied = 0;
    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            tokio::fs::create_dir_all(&target)
                .await
                .map_err(|e| ScaffoldError::io("create", &target, e))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target).await?;
            copied += 1;
        } else {
            tokio::fs::copy(entry.path(), &target)
                .await
                .map_err(|e| ScaffoldError::io("copy", entry.path(), e))?;
            copied += 1;
        }
    }

    tracing::debug!(src = %src.display(), dst = %dst.display(), copied, "Copied tree");
    Ok(copied)
}

async fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let points_to = tokio::fs::read_link(link)
        .await
        .map_err(|e| ScaffoldError::io("read link", link, e))?;
    create_symlink(&points_to, link, target)
        .await
        .map_err(|e| ScaffoldError::io("link", target, e))
}

#[cfg(unix)]
async fn create_symlink(points_to: &Path, _link: &Path, target: &Path) -> std::io::Result<()> {
    tokio::fs::symlink(points_to, target).await
}

#[cfg(windows)]
async fn create_symlink(points_to: &Path, link: &Path, target: &Path) -> std::io::Result<()> {
    // Dangling links are recreated as file links
    let is_dir = tokio::fs::metadata(link)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if is_dir {
        tokio::fs::symlink_dir(points_to, target).await
    } else {
        tokio::fs::symlink_file(points_to, target).await
    }
}

/// @acp:summary "Remove every entry inside a directory, creating it if missing"
pub async fn empty_dir(dir: &Path) -> Result<()> {
    if !tokio::fs::try_exists(dir)
        .await
        .map_err(|e| ScaffoldError::io("inspect", dir, e))?
    {
        return tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ScaffoldError::io("create", dir, e));
    }

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io("list", dir, e))?;

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
        let removed = if file_type.is_dir() {
            tokio::fs::remove_dir_all(&path).await
        } else {
            tokio::fs::remove_file(&path).await
        };
        removed.map_err(|e| ScaffoldError::io("remove", &path, e))?;
    }

    Ok(())
}
