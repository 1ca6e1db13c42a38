//! Prompt vault on disk
//!
//! A vault is a directory of categories, each holding prompt documents as
//! markdown files. This module is the file-system boundary around the
//! renderer and validator: it names, creates and reads documents but never
//! interprets their content.

mod naming;

pub use naming::{prompt_file_name, validate_name, validate_prompt_name};

use crate::config::consts::{CATEGORY_FILE_EXTENSIONS, CONFIG_FILE};
use crate::config::VaultConfig;
use crate::error::{Result, VaultError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A prompt vault rooted at a directory
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    config: VaultConfig,
}

impl Vault {
    /// Open a vault, loading `vault.toml` from the root when present
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = VaultConfig::load_or_default(root.join(CONFIG_FILE))?;
        Ok(Self { root, config })
    }

    pub fn with_config(root: impl Into<PathBuf>, config: VaultConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Existing categories, sorted by name
    ///
    /// A category is a non-hidden directory directly under the root that
    /// holds at least one `.md` or `.xlsx` file.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut categories = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(VaultError::Io(e.into())),
                Err(e) => {
                    warn!("Skipping unreadable vault entry: {}", e);
                    continue;
                }
            };

            // Follows symlinks, so linked category directories are listed
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if has_category_files(entry.path()) {
                categories.push(name.to_string());
            }
        }

        debug!(root = %self.root.display(), count = categories.len(), "scanned categories");
        Ok(categories)
    }

    /// Where a prompt with this name and version lives
    pub fn prompt_path(&self, category: &str, name: &str, version: &str) -> Result<PathBuf> {
        validate_name(category)?;
        validate_prompt_name(name)?;
        let file_name = prompt_file_name(name, version);
        validate_name(&file_name)?;
        Ok(self.root.join(category).join(file_name))
    }

    /// Write a new prompt document, creating the category if needed
    ///
    /// The content goes to a temporary file in the category directory first,
    /// so a failed write never leaves a partial document at the target path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The category or derived file name is not a safe single component
    /// - A document already exists at the target path
    /// - Directory creation or writing fails
    pub fn create_prompt(
        &self,
        category: &str,
        name: &str,
        version: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let path = self.prompt_path(category, name, version)?;
        let dir = self.root.join(category);
        fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;

        file.persist_noclobber(&path).map_err(|e| match e.error.kind() {
            io::ErrorKind::AlreadyExists => VaultError::PromptAlreadyExists { path: path.clone() },
            _ => VaultError::Io(e.error),
        })?;

        debug!(path = %path.display(), "created prompt document");
        Ok(path)
    }

    /// Resolve a path against the vault root (absolute paths pass through)
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Read a document's text
    pub fn read_document(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VaultError::PromptNotFound { path },
            _ => VaultError::Io(e),
        })
    }
}

fn has_category_files(dir: &Path) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| CATEGORY_FILE_EXTENSIONS.contains(&ext))
                    .unwrap_or(false)
        })
}
