//! Prompt document renderer

use crate::clock::{format_date, Clock, SystemClock};
use crate::template::engine::TemplateEngine;
use crate::template::error::TemplateError;
use crate::template::fields::{FieldName, TemplateFields};
use tracing::debug;

/// Skeleton of every new prompt document
pub const PROMPT_SKELETON: &str = r#"# {{name}} v{{version}}

## Purpose
{{purpose}}

## COSTAR Analysis

### Context
{{context}}

### Objective
{{objective}}

### Style
{{style}}

### Tone
{{tone}}

### Audience
{{audience}}

### Response
{{response}}

## The Prompt
```
{{prompt_text}}
```

## Test Cases

### Test Case 1: [Description]
**Input:**
```
[Input text]
```

**Output:**
```
[Expected output]
```

**Result:** ✅ Pass / ❌ Fail

### Test Case 2: [Description]
**Input:**
```
[Input text]
```

**Output:**
```
[Expected output]
```

**Result:** ✅ Pass / ❌ Fail

### Test Case 3: [Description]
**Input:**
```
[Input text]
```

**Output:**
```
[Expected output]
```

**Result:** ✅ Pass / ❌ Fail

## Evaluation Results

- **Accuracy:** [%]
- **Clarity:** [Poor/Good/Excellent]
- **Completeness:** [%]
- **User Satisfaction:** [Rating/5]
- **Latency:** [ms]

## Changelog

### v{{version}} ({{date}})
- [What changed]
- [Why it changed]
- [Performance impact]

## Notes

[Any additional notes or future improvements]
"#;

/// Renders [`PROMPT_SKELETON`] from template fields
///
/// When `date` is not among the fields, the clock supplies it.
#[derive(Debug, Clone, Default)]
pub struct PromptRenderer<C = SystemClock> {
    clock: C,
    engine: TemplateEngine,
}

impl PromptRenderer<SystemClock> {
    /// Renderer dated by the local system clock
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> PromptRenderer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            engine: TemplateEngine::new(),
        }
    }

    /// Render a complete prompt document
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingFields`] naming every field the
    /// skeleton needs but `fields` lacks. No partial document is produced.
    pub fn render(&self, fields: &TemplateFields) -> Result<String, TemplateError> {
        let mut context = fields.clone();
        if !context.contains(FieldName::Date) {
            context.set(FieldName::Date, format_date(self.clock.today()));
        }

        let document = self.engine.render(PROMPT_SKELETON, &context)?;
        debug!(
            name = context.field(FieldName::Name).unwrap_or_default(),
            version = context.field(FieldName::Version).unwrap_or_default(),
            bytes = document.len(),
            "rendered prompt document"
        );
        Ok(document)
    }
}
