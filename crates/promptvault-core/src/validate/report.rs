//! Validation report schema

use crate::schema::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating one document
///
/// Structural validity depends only on the COSTAR sections. Test cases and
/// the evaluation block feed [`ValidationReport::warnings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    missing_sections: Vec<Phase>,
    test_case_count: usize,
    has_evaluation_block: bool,
    min_test_cases: usize,
}

impl ValidationReport {
    pub(crate) fn new(
        missing_sections: Vec<Phase>,
        test_case_count: usize,
        has_evaluation_block: bool,
        min_test_cases: usize,
    ) -> Self {
        Self {
            missing_sections,
            test_case_count,
            has_evaluation_block,
            min_test_cases,
        }
    }

    /// Required phases without a heading, in canonical order
    pub fn missing_sections(&self) -> &[Phase] {
        &self.missing_sections
    }

    pub fn test_case_count(&self) -> usize {
        self.test_case_count
    }

    pub fn has_evaluation_block(&self) -> bool {
        self.has_evaluation_block
    }

    /// Threshold the test-case count was compared against
    pub fn min_test_cases(&self) -> usize {
        self.min_test_cases
    }

    /// True iff every required section is present
    pub fn is_valid(&self) -> bool {
        self.missing_sections.is_empty()
    }

    /// Advisory findings; never affect [`is_valid`](Self::is_valid)
    pub fn warnings(&self) -> Vec<Advisory> {
        let mut warnings = Vec::new();
        if self.test_case_count < self.min_test_cases {
            warnings.push(Advisory::TooFewTestCases {
                found: self.test_case_count,
                minimum: self.min_test_cases,
            });
        }
        if !self.has_evaluation_block {
            warnings.push(Advisory::MissingEvaluation);
        }
        warnings
    }

    /// One display check per schema concern
    pub fn checks(&self) -> Vec<Check> {
        let sections = if self.is_valid() {
            Check::new(
                "costar_sections",
                "COSTAR sections",
                CheckStatus::Pass,
                "All COSTAR phases found",
            )
        } else {
            let names: Vec<&str> = self.missing_sections.iter().map(|p| p.name()).collect();
            Check::new(
                "costar_sections",
                "COSTAR sections",
                CheckStatus::Error,
                format!("Missing COSTAR phases: {}", names.join(", ")),
            )
        };

        let test_cases = if self.test_case_count >= self.min_test_cases {
            Check::new(
                "test_cases",
                "Test cases",
                CheckStatus::Pass,
                format!("Test cases found: {}", self.test_case_count),
            )
        } else {
            Check::new(
                "test_cases",
                "Test cases",
                CheckStatus::Warning,
                format!(
                    "Recommended: at least {} test cases (found {})",
                    self.min_test_cases, self.test_case_count
                ),
            )
        };

        let evaluation = if self.has_evaluation_block {
            Check::new(
                "evaluation_results",
                "Evaluation results",
                CheckStatus::Pass,
                "Evaluation results found",
            )
        } else {
            Check::new(
                "evaluation_results",
                "Evaluation results",
                CheckStatus::Warning,
                "Missing evaluation results",
            )
        };

        vec![sections, test_cases, evaluation]
    }
}

/// Non-fatal finding about a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    TooFewTestCases { found: usize, minimum: usize },
    MissingEvaluation,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::TooFewTestCases { found, minimum } => write!(
                f,
                "Recommended: at least {} test cases (found {})",
                minimum, found
            ),
            Advisory::MissingEvaluation => f.write_str("Missing evaluation results"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// A single line of a rendered report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Check {
    pub id: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl Check {
    fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_ignores_advisories() {
        let report = ValidationReport::new(vec![], 0, false, 3);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings(),
            vec![
                Advisory::TooFewTestCases {
                    found: 0,
                    minimum: 3
                },
                Advisory::MissingEvaluation,
            ]
        );
    }

    #[test]
    fn test_checks_report_missing_sections_as_error() {
        let report = ValidationReport::new(vec![Phase::Tone, Phase::Audience], 3, true, 3);
        let checks = report.checks();
        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].status, CheckStatus::Error);
        assert_eq!(checks[0].message, "Missing COSTAR phases: Tone, Audience");
        assert_eq!(checks[1].status, CheckStatus::Pass);
        assert_eq!(checks[2].status, CheckStatus::Pass);
    }

    #[test]
    fn test_only_sections_check_can_error() {
        let report = ValidationReport::new(vec![], 1, false, 3);
        let statuses: Vec<CheckStatus> = report.checks().iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![CheckStatus::Pass, CheckStatus::Warning, CheckStatus::Warning]
        );
    }

    #[test]
    fn test_advisory_serializes_with_kind_tag() {
        let json = serde_json::to_value(Advisory::TooFewTestCases {
            found: 1,
            minimum: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "too_few_test_cases");
        assert_eq!(json["found"], 1);
    }
}
