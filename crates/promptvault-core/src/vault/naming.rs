//! Category and prompt file naming

use crate::error::{Result, VaultError};
use std::path::{Component, Path};

/// Validate a category or file name
///
/// # Security
///
/// Blocks:
/// - Empty names
/// - Absolute paths and drive prefixes
/// - Parent (`..`) and current (`.`) directory components
/// - Path separators (multiple components like `foo/bar`)
///
/// # Examples
///
/// ```
/// # use promptvault_core::vault::validate_name;
/// assert!(validate_name("customer-support").is_ok());
/// assert!(validate_name("../secrets").is_err());
/// assert!(validate_name("a/b").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VaultError::invalid_name(name, "Name cannot be empty"));
    }

    let path = Path::new(name);
    if path.is_absolute() || path.has_root() {
        return Err(VaultError::invalid_name(
            name,
            "Name cannot be an absolute path",
        ));
    }

    let mut normal_count = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::Prefix(_) => {
                return Err(VaultError::invalid_name(
                    name,
                    "Name cannot contain drive prefix",
                ))
            }
            Component::RootDir => {
                return Err(VaultError::invalid_name(
                    name,
                    "Name cannot be an absolute path",
                ))
            }
            Component::CurDir => {
                return Err(VaultError::invalid_name(
                    name,
                    "Name cannot contain current directory (.)",
                ))
            }
            Component::ParentDir => {
                return Err(VaultError::invalid_name(
                    name,
                    "Name cannot contain parent directory (..)",
                ))
            }
        }
    }

    if normal_count != 1 {
        return Err(VaultError::invalid_name(
            name,
            "Name must be a single path component without separators",
        ));
    }

    Ok(())
}

/// Validate a prompt name before it becomes part of a file name
///
/// Names may contain spaces (they become underscores) but no path separators,
/// so "A/B Tester" is rejected instead of turning into a nested path.
pub fn validate_prompt_name(name: &str) -> Result<()> {
    if name.contains(['/', '\\']) {
        return Err(VaultError::invalid_name(
            name,
            "Prompt name cannot contain path separators",
        ));
    }
    Ok(())
}

/// File name for a prompt: `<Name_With_Underscores>_v<version>.md`
///
/// A leading `v` on the version is not doubled.
pub fn prompt_file_name(name: &str, version: &str) -> String {
    let stem = name.trim().replace(' ', "_");
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    format!("{}_v{}.md", stem, version)
}
