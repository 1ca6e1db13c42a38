//! Integration tests: rendered documents always pass validation

use promptvault_core::schema::Phase;
use promptvault_core::template::{FieldName, PromptRenderer, TemplateError, TemplateFields};
use promptvault_core::validate::{Advisory, Validator};
use promptvault_core::{DocumentSchema, FixedClock};
use promptvault_testkit::fixtures::{COMPLETE_DOCUMENT, HEADINGS_ONLY, MISSING_TONE_AND_AUDIENCE};

fn fields(name: &str, version: &str, prompt_text: &str) -> TemplateFields {
    TemplateFields::new()
        .with(FieldName::Name, name)
        .with(FieldName::Version, version)
        .with(FieldName::Purpose, "purpose")
        .with(FieldName::Context, "context")
        .with(FieldName::Objective, "objective")
        .with(FieldName::Style, "style")
        .with(FieldName::Tone, "tone")
        .with(FieldName::Audience, "audience")
        .with(FieldName::Response, "response")
        .with(FieldName::PromptText, prompt_text)
}

fn renderer() -> PromptRenderer<FixedClock> {
    PromptRenderer::new(FixedClock::from_ymd(2026, 10, 16).unwrap())
}

#[test]
fn test_rendered_document_validates() {
    let cases = [
        fields("Customer Support Assistant", "1.0.0", "You are helpful."),
        fields("Translator", "0.3.1-beta", "Translate {{text}} to French."),
        fields("", "", ""),
        fields("Multi Line", "2.0.0", "Line one\n### Context\nLine three"),
    ];

    let validator = Validator::costar();
    for case in &cases {
        let document = renderer().render(case).unwrap();
        let report = validator.validate(&document);
        assert!(report.is_valid(), "document should validate:\n{}", document);
        assert!(report.missing_sections().is_empty());
        assert_eq!(report.test_case_count(), 3);
        assert!(report.has_evaluation_block());
        assert!(report.warnings().is_empty());
    }
}

#[test]
fn test_render_fails_instead_of_producing_partial_document() {
    let incomplete = TemplateFields::new()
        .with(FieldName::Name, "Helper")
        .with(FieldName::Version, "1.0.0")
        .with(FieldName::Purpose, "purpose")
        .with(FieldName::Context, "context")
        .with(FieldName::Objective, "objective")
        .with(FieldName::Style, "style")
        .with(FieldName::Tone, "tone")
        .with(FieldName::Response, "response")
        .with(FieldName::PromptText, "text");

    let err = renderer().render(&incomplete).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingFields {
            fields: vec!["audience".to_string()]
        }
    );
}

#[test]
fn test_headings_only_fixture() {
    let report = Validator::costar().validate(HEADINGS_ONLY);
    assert!(report.is_valid());
    assert_eq!(report.test_case_count(), 0);
    assert!(!report.has_evaluation_block());
}

#[test]
fn test_complete_fixture_has_zero_warnings() {
    let report = Validator::costar().validate(COMPLETE_DOCUMENT);
    assert!(report.is_valid());
    assert_eq!(report.test_case_count(), 3);
    assert!(report.has_evaluation_block());
    assert!(report.warnings().is_empty());
}

#[test]
fn test_missing_tone_and_audience_fixture() {
    let report = Validator::costar().validate(MISSING_TONE_AND_AUDIENCE);
    assert!(!report.is_valid());
    assert_eq!(report.missing_sections(), &[Phase::Tone, Phase::Audience]);
}

#[test]
fn test_stricter_schema_warns_on_rendered_document() {
    let document = renderer().render(&fields("Helper", "1.0.0", "x")).unwrap();
    let validator = Validator::new(DocumentSchema::costar().with_min_test_cases(5));

    let report = validator.validate(&document);
    assert!(report.is_valid());
    assert_eq!(
        report.warnings(),
        vec![Advisory::TooFewTestCases {
            found: 3,
            minimum: 5
        }]
    );
}
