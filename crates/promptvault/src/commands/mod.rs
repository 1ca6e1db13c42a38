//! CLI command implementations

pub mod categories;
pub mod changelog;
pub mod checklist;
pub mod new;
pub mod validate;
pub mod welcome;
