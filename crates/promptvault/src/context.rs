//! Global context for CLI commands

use anyhow::{Context as _, Result};
use promptvault_core::Vault;
use std::path::Path;

/// Global context containing the opened vault
pub struct Context {
    pub vault: Vault,
    pub verbose: bool,
}

impl Context {
    /// Open the vault at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if `vault.toml` exists but cannot be read or parsed
    pub fn new(root: &Path, verbose: bool) -> Result<Self> {
        let vault = Vault::open(root)
            .with_context(|| format!("Failed to open vault at {}", root.display()))?;

        Ok(Self { vault, verbose })
    }
}
