//! Schema validation engine

use crate::schema::{DocumentSchema, Phase};
use crate::validate::report::ValidationReport;
use tracing::debug;

/// Checks document text against a [`DocumentSchema`]
///
/// Matching is literal substring search. Headings may appear in any order
/// and surrounding formatting is ignored.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    schema: DocumentSchema,
}

impl Validator {
    pub fn new(schema: DocumentSchema) -> Self {
        Self { schema }
    }

    /// Validator for the standard COSTAR schema
    pub fn costar() -> Self {
        Self::new(DocumentSchema::costar())
    }

    pub fn schema(&self) -> &DocumentSchema {
        &self.schema
    }

    /// Validate document text
    ///
    /// Never fails: every malformation is reported as data.
    pub fn validate(&self, text: &str) -> ValidationReport {
        let missing_sections: Vec<Phase> = self
            .schema
            .required_sections()
            .iter()
            .copied()
            .filter(|phase| !text.contains(&phase.heading()))
            .collect();

        let test_case_count = text.matches(self.schema.test_case_marker()).count();
        let has_evaluation_block = text.contains(self.schema.evaluation_marker());

        debug!(
            missing = missing_sections.len(),
            test_case_count, has_evaluation_block, "validated document"
        );

        ValidationReport::new(
            missing_sections,
            test_case_count,
            has_evaluation_block,
            self.schema.min_test_cases(),
        )
    }
}
