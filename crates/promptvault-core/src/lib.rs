// Core modules
pub mod changelog;
pub mod checklist;
pub mod clock;
pub mod config;
pub mod error;
pub mod schema;
pub mod template;
pub mod validate;
pub mod vault;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, VaultError};
pub use schema::{DocumentSchema, Phase};
pub use template::{FieldName, PromptRenderer, TemplateError, TemplateFields};
pub use validate::{ValidationReport, Validator};
pub use vault::Vault;
