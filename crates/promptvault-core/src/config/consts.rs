//! Constants shared by the vault and its configuration

/// Config file name at the vault root
pub const CONFIG_FILE: &str = "vault.toml";

/// Version offered when a contributor does not choose one
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Extensions that mark a directory as a category
pub const CATEGORY_FILE_EXTENSIONS: &[&str] = &["md", "xlsx"];
