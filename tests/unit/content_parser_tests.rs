/*!
 * Tests for structured content extraction
 */

use copylint::content::{BrandGuidelines, ContentValidator};

const LANDING_COPY: &str = "# Breathe easier

Continuous FeNO monitoring supports early detection of airway inflammation.

## For patients

A wearable sensor tracks volatile organic compounds in exhaled breath.
Results are reviewed by your physician.

### Evidence

Clinical validation is ongoing.";

/// Test that headings of every level are extracted in order
#[test]
fn test_parseContent_withMarkdownHeadings_shouldExtractInOrder() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content(LANDING_COPY);

    assert_eq!(parsed.headings, vec!["Breathe easier", "For patients", "Evidence"]);
}

/// Test that paragraphs are split on blank lines only
#[test]
fn test_parseContent_withBlankLines_shouldSplitParagraphs() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content(LANDING_COPY);

    assert_eq!(parsed.paragraphs.len(), 6);
    assert!(parsed.paragraphs[3].contains("exhaled breath.\nResults"));
}

/// Test that medical terms are matched case-insensitively in configuration order
#[test]
fn test_parseContent_shouldListMedicalTermsInConfigOrder() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content(LANDING_COPY);

    assert_eq!(
        parsed.medical_terms,
        vec![
            "FeNO",
            "volatile organic compounds",
            "inflammation",
            "airway",
            "exhaled breath",
            "monitoring",
            "sensor",
        ]
    );
}

/// Test that key phrases come from the configured phrase list
#[test]
fn test_parseContent_shouldExtractKeyPhrases() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content(LANDING_COPY);

    assert_eq!(parsed.key_phrases, vec!["early detection", "clinical validation"]);
}

/// Test that custom key phrases replace the defaults
#[test]
fn test_parseContent_withCustomKeyPhrases_shouldUseThem() {
    let guidelines = BrandGuidelines {
        key_phrases: vec!["breathe easier".to_string()],
        ..Default::default()
    };
    let validator = ContentValidator::with_guidelines(guidelines);

    let parsed = validator.parse_content(LANDING_COPY);

    assert_eq!(parsed.key_phrases, vec!["breathe easier"]);
}

/// Test that empty input yields empty collections
#[test]
fn test_parseContent_withEmptyInput_shouldReturnEmptyCollections() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content("");

    assert!(parsed.headings.is_empty());
    assert!(parsed.paragraphs.is_empty());
    assert!(parsed.medical_terms.is_empty());
    assert!(parsed.key_phrases.is_empty());
    assert!(parsed.validation.score < 50);
}

/// Test that parsed content serializes with its validation
#[test]
fn test_parsedContent_serialize_shouldIncludeValidation() {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content(LANDING_COPY);
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json["headings"][0], "Breathe easier");
    assert!(json["validation"]["is_valid"].as_bool().unwrap());
}
