use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum VaultError {
    // Prompt document errors
    #[error("PROMPT_NOT_FOUND: '{}' does not exist", .path.display())]
    PromptNotFound { path: PathBuf },

    #[error("PROMPT_ALREADY_EXISTS: '{}' already exists", .path.display())]
    PromptAlreadyExists { path: PathBuf },

    // Naming errors
    #[error("INVALID_NAME: {reason}: '{name}'")]
    InvalidName { name: String, reason: String },

    // Config errors
    #[error("CONFIG_INVALID: failed to parse {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        VaultError::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_codes() {
        let err = VaultError::PromptNotFound {
            path: PathBuf::from("support/Helper_v1.0.0.md"),
        };
        assert_eq!(
            err.to_string(),
            "PROMPT_NOT_FOUND: 'support/Helper_v1.0.0.md' does not exist"
        );

        let err = VaultError::invalid_name("..", "Name cannot contain parent directory (..)");
        assert!(err.to_string().starts_with("INVALID_NAME:"));
    }

    #[test]
    fn test_template_error_converts() {
        let err: VaultError = TemplateError::MissingFields {
            fields: vec!["name".to_string()],
        }
        .into();
        assert!(err.to_string().contains("TEMPLATE_ERROR"));
        assert!(err.to_string().contains("name"));
    }
}
