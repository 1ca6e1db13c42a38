//! Contribution checklist

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub item: &'static str,
    pub description: &'static str,
}

/// What a contribution needs before a pull request
pub const CONTRIBUTION_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        item: "COSTAR Analysis",
        description: "Complete Context, Objective, Style, Tone, Audience, Response",
    },
    ChecklistItem {
        item: "Test Cases",
        description: "At least 3 test cases with inputs and outputs",
    },
    ChecklistItem {
        item: "Evaluation Results",
        description: "Metrics showing quality, accuracy, satisfaction",
    },
    ChecklistItem {
        item: "Version Number",
        description: "Semantic versioning (e.g., v1.0.0)",
    },
    ChecklistItem {
        item: "Documentation",
        description: "Clear markdown formatting and explanation",
    },
    ChecklistItem {
        item: "Changelog",
        description: "Description of changes and improvements",
    },
    ChecklistItem {
        item: "File Naming",
        description: "Follow pattern: [PromptName]_v[version].md",
    },
    ChecklistItem {
        item: "Tested",
        description: "Verified with multiple examples",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Phase;

    #[test]
    fn test_checklist_has_eight_items() {
        assert_eq!(CONTRIBUTION_CHECKLIST.len(), 8);
    }

    #[test]
    fn test_costar_item_names_every_phase() {
        let costar = &CONTRIBUTION_CHECKLIST[0];
        for phase in Phase::ALL {
            assert!(costar.description.contains(phase.name()));
        }
    }
}
