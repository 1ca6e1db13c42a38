//! Document schema - the structural contract every prompt document follows
//!
//! A prompt document must declare the six COSTAR phases as `### <Phase>`
//! headings. Test cases (`### Test Case`) and an evaluation block
//! (`## Evaluation Results`) are recommended but only produce advisories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading prefix for COSTAR sections
pub const SECTION_HEADING_PREFIX: &str = "### ";

/// Marker counted once per test case
pub const TEST_CASE_MARKER: &str = "### Test Case";

/// Marker for the evaluation block
pub const EVALUATION_MARKER: &str = "## Evaluation Results";

/// Recommended minimum number of test cases
pub const DEFAULT_MIN_TEST_CASES: usize = 3;

/// One phase of the COSTAR analytical framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Context,
    Objective,
    Style,
    Tone,
    Audience,
    Response,
}

impl Phase {
    /// All phases in canonical order
    pub const ALL: [Phase; 6] = [
        Phase::Context,
        Phase::Objective,
        Phase::Style,
        Phase::Tone,
        Phase::Audience,
        Phase::Response,
    ];

    /// Single-letter code (the letters spell COSTAR)
    pub fn code(self) -> char {
        match self {
            Phase::Context => 'C',
            Phase::Objective => 'O',
            Phase::Style => 'S',
            Phase::Tone => 'T',
            Phase::Audience => 'A',
            Phase::Response => 'R',
        }
    }

    /// Full phase name as it appears in headings
    pub fn name(self) -> &'static str {
        match self {
            Phase::Context => "Context",
            Phase::Objective => "Objective",
            Phase::Style => "Style",
            Phase::Tone => "Tone",
            Phase::Audience => "Audience",
            Phase::Response => "Response",
        }
    }

    /// Heading marker whose presence satisfies this phase
    pub fn heading(self) -> String {
        format!("{}{}", SECTION_HEADING_PREFIX, self.name())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable description of what a valid document must contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSchema {
    required_sections: Vec<Phase>,
    test_case_marker: String,
    min_test_cases: usize,
    evaluation_marker: String,
}

impl DocumentSchema {
    /// The standard COSTAR schema
    pub fn costar() -> Self {
        Self {
            required_sections: Phase::ALL.to_vec(),
            test_case_marker: TEST_CASE_MARKER.to_string(),
            min_test_cases: DEFAULT_MIN_TEST_CASES,
            evaluation_marker: EVALUATION_MARKER.to_string(),
        }
    }

    /// Same schema with a different test-case threshold
    pub fn with_min_test_cases(mut self, min_test_cases: usize) -> Self {
        self.min_test_cases = min_test_cases;
        self
    }

    /// Same schema requiring only the given phases
    ///
    /// Phases are kept in canonical order and deduplicated.
    pub fn with_required_sections(mut self, sections: impl IntoIterator<Item = Phase>) -> Self {
        let mut sections: Vec<Phase> = sections.into_iter().collect();
        sections.sort();
        sections.dedup();
        self.required_sections = sections;
        self
    }

    pub fn required_sections(&self) -> &[Phase] {
        &self.required_sections
    }

    pub fn test_case_marker(&self) -> &str {
        &self.test_case_marker
    }

    pub fn min_test_cases(&self) -> usize {
        self.min_test_cases
    }

    pub fn evaluation_marker(&self) -> &str {
        &self.evaluation_marker
    }
}

impl Default for DocumentSchema {
    fn default() -> Self {
        Self::costar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_codes_spell_costar() {
        let codes: String = Phase::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, "COSTAR");
    }

    #[test]
    fn test_phase_heading() {
        assert_eq!(Phase::Objective.heading(), "### Objective");
        assert_eq!(Phase::Response.to_string(), "Response");
    }

    #[test]
    fn test_costar_schema_defaults() {
        let schema = DocumentSchema::costar();
        assert_eq!(schema.required_sections(), &Phase::ALL);
        assert_eq!(schema.test_case_marker(), "### Test Case");
        assert_eq!(schema.min_test_cases(), 3);
        assert_eq!(schema.evaluation_marker(), "## Evaluation Results");
        assert_eq!(schema, DocumentSchema::default());
    }

    #[test]
    fn test_stricter_threshold_leaves_sections_untouched() {
        let schema = DocumentSchema::costar().with_min_test_cases(5);
        assert_eq!(schema.min_test_cases(), 5);
        assert_eq!(schema.required_sections().len(), 6);
    }

    #[test]
    fn test_required_sections_are_canonicalised() {
        let schema = DocumentSchema::costar().with_required_sections([
            Phase::Response,
            Phase::Context,
            Phase::Response,
        ]);
        assert_eq!(schema.required_sections(), &[Phase::Context, Phase::Response]);
    }
}
