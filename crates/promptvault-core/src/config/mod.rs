//! Vault configuration (`vault.toml`)

pub mod consts;
pub mod model;

pub use model::{PromptConfig, ValidationConfig, VaultConfig};
