//! Template engine implementation

use crate::template::error::TemplateError;
use crate::template::fields::TemplateFields;

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Literal text copied to the output
    Text(&'a str),
    /// `{{key}}` to be replaced by a field value
    Placeholder(&'a str),
}

/// Count backslashes immediately before `pos`, not looking before `floor`
fn count_backslashes_before(text: &str, floor: usize, pos: usize) -> usize {
    text.as_bytes()[floor..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count()
}

/// Count newlines in text
fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Split a template into literal text and placeholders
///
/// Backslashes before `{{` follow the usual escaping rule: each pair renders
/// as one backslash, and an odd count turns the `{{...}}` into literal text.
fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut line = 1;

    while let Some(offset) = template[pos..].find("{{") {
        let open = pos + offset;
        let backslash_count = count_backslashes_before(template, pos, open);
        let text_end = open - backslash_count;

        if text_end > pos {
            let text = &template[pos..text_end];
            segments.push(Segment::Text(text));
            line += count_newlines(text);
        }
        if backslash_count >= 2 {
            segments.push(Segment::Text(
                &template[text_end..text_end + backslash_count / 2],
            ));
        }

        let close = template[open + 2..]
            .find("}}")
            .ok_or_else(|| TemplateError::MalformedSyntax {
                message: "Unclosed placeholder".to_string(),
                line,
            })?;
        let end = open + 2 + close + 2;

        if backslash_count % 2 == 1 {
            segments.push(Segment::Text(&template[open..end]));
        } else {
            let key = template[open + 2..open + 2 + close].trim();
            if key.is_empty() {
                return Err(TemplateError::MalformedSyntax {
                    message: "Empty placeholder".to_string(),
                    line,
                });
            }
            segments.push(Segment::Placeholder(key));
        }

        line += count_newlines(&template[open..end]);
        pos = end;
    }

    if pos < template.len() {
        segments.push(Segment::Text(&template[pos..]));
    }

    Ok(segments)
}

/// Keys referenced by a template, in order of first appearance
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut keys: Vec<String> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Placeholder(key) = segment {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    Ok(keys)
}

/// Template engine for rendering templates with named string fields
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given fields
    ///
    /// Every placeholder must have a value. When some do not, nothing is
    /// rendered and the error lists all of them.
    pub fn render(
        &self,
        template: &str,
        fields: &TemplateFields,
    ) -> Result<String, TemplateError> {
        let segments = parse(template)?;

        let mut missing: Vec<String> = Vec::new();
        for segment in &segments {
            if let Segment::Placeholder(key) = segment {
                if fields.get(key).is_none() && !missing.iter().any(|m| m == key) {
                    missing.push(key.to_string());
                }
            }
        }
        if !missing.is_empty() {
            return Err(TemplateError::MissingFields { fields: missing });
        }

        let mut output = String::with_capacity(template.len());
        for segment in segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder(key) => {
                    // Presence checked above
                    output.push_str(fields.get(key).unwrap_or_default());
                }
            }
        }

        Ok(output)
    }
}
