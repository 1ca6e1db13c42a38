//! Named values substituted into a template

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fields referenced by the prompt skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Version,
    Purpose,
    Context,
    Objective,
    Style,
    Tone,
    Audience,
    Response,
    PromptText,
    Date,
}

impl FieldName {
    /// All fields in skeleton order
    pub const ALL: [FieldName; 11] = [
        FieldName::Name,
        FieldName::Version,
        FieldName::Purpose,
        FieldName::Context,
        FieldName::Objective,
        FieldName::Style,
        FieldName::Tone,
        FieldName::Audience,
        FieldName::Response,
        FieldName::PromptText,
        FieldName::Date,
    ];

    /// Placeholder key used in templates
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Version => "version",
            FieldName::Purpose => "purpose",
            FieldName::Context => "context",
            FieldName::Objective => "objective",
            FieldName::Style => "style",
            FieldName::Tone => "tone",
            FieldName::Audience => "audience",
            FieldName::Response => "response",
            FieldName::PromptText => "prompt_text",
            FieldName::Date => "date",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from placeholder key to value
///
/// Serializes as a flat table, so a TOML file like
///
/// ```toml
/// name = "Customer Support Assistant"
/// version = "1.0.0"
/// ```
///
/// deserializes directly into fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateFields {
    values: BTreeMap<String, String>,
}

impl TemplateFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field.as_str().to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.get(field.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(field.as_str())
    }

    /// Fields from [`FieldName::ALL`] that have no value yet
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| !self.contains(*field))
            .collect()
    }

    /// Copy every value from `other` that is not already set here
    pub fn fill_from(&mut self, other: TemplateFields) {
        for (key, value) in other.values {
            self.values.entry(key).or_insert(value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
