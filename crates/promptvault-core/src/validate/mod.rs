//! Document validation against the COSTAR schema

pub mod engine;
pub mod report;

pub use engine::Validator;
pub use report::{Advisory, Check, CheckStatus, ValidationReport};
