//! Template module - placeholder substitution and the prompt document skeleton
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ key }}` (spaces optional)
//! - Escape sequences: `\{{literal}}` renders as `{{literal}}`
//!
//! Substituted values are inserted verbatim and never scanned again, so a
//! prompt text containing `{{...}}` survives rendering untouched.

pub mod engine;
pub mod error;
pub mod fields;
pub mod prompt;

pub use engine::{placeholders, TemplateEngine};
pub use error::TemplateError;
pub use fields::{FieldName, TemplateFields};
pub use prompt::{PromptRenderer, PROMPT_SKELETON};
