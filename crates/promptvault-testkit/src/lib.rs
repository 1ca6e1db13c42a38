//! Test utilities for promptvault
//!
//! This crate provides shared testing utilities used across the promptvault workspace.

pub mod fixtures;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test files in one gitignored location that is easy to clean
/// up manually if a test is interrupted.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use promptvault_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.md");
/// std::fs::write(&file_path, "### Context").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Create a category directory holding a README.md, so it is picked up
/// by category scanning
///
/// Returns the category directory.
pub fn seed_category(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).expect("Failed to create category directory");
    std::fs::write(dir.join("README.md"), format!("# {}\n", name))
        .expect("Failed to write category README");
    dir
}

/// Write a document into a directory and return its path
pub fn write_document(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, content).expect("Failed to write document");
    path
}
