/*!
 * Round trip tests: parse content, rebuild canonical text, parse again
 */

use copylint::content::{ContentValidator, ParsedContent, ValidationResult};
use std::collections::BTreeSet;
use crate::common;

fn as_set(items: &[String]) -> BTreeSet<String> {
    items.iter().cloned().collect()
}

/// Parse `content`, rebuild it and parse the rebuilt text
fn round_trip(validator: &ContentValidator, content: &str) -> (ParsedContent, ParsedContent) {
    let first = validator.parse_content(content);
    let second = validator.parse_content(&first.to_canonical_text());
    (first, second)
}

/// Test that landing page copy survives a round trip
#[test]
fn test_roundTrip_withLandingCopy_shouldKeepTermsAndScore() {
    common::init_logging();
    let validator = ContentValidator::new();
    let content = "# Predictive monitoring\n\n\
        Our clinical sensor reads FeNO in exhaled breath for early detection of airway inflammation.\n\n\
        ## Clinical validation\n\n\
        Precise, reliable measurements are reviewed with your physician.\n";

    let (first, second) = round_trip(&validator, content);

    assert_eq!(as_set(&first.medical_terms), as_set(&second.medical_terms));
    assert_eq!(as_set(&first.key_phrases), as_set(&second.key_phrases));
    assert_eq!(first.headings, second.headings);
    assert!(first.validation.score.abs_diff(second.validation.score) <= 5);
}

/// Test that irregular blank lines and indentation do not change extracted terms
#[test]
fn test_roundTrip_withIrregularWhitespace_shouldStayWithinFivePoints() {
    let validator = ContentValidator::new();
    let content = "\n\n# Title\n \n\t\n   FeNO monitoring for asthma.\n\n\n\nEarly detection matters.   \n\n";

    let (first, second) = round_trip(&validator, content);

    assert_eq!(as_set(&first.medical_terms), as_set(&second.medical_terms));
    assert_eq!(as_set(&first.key_phrases), as_set(&second.key_phrases));
    assert_eq!(second.headings, vec!["Title".to_string()]);
    assert!(first.validation.score.abs_diff(second.validation.score) <= 5);
}

/// Test that trailing blank lines around a short paragraph do not cross the terminology length gate
#[test]
fn test_roundTrip_withTrailingBlankLinesNearLengthGate_shouldKeepScore() {
    let validator = ContentValidator::new();
    let content = format!("{}\n\n\n", vec!["a"; 50].join(" "));

    let (first, second) = round_trip(&validator, &content);

    assert_eq!(first.validation.score, second.validation.score);
    assert_eq!(first.validation.warnings, second.validation.warnings);
}

/// Test that hype and placeholders stay detected after a round trip
#[test]
fn test_roundTrip_withInvalidContent_shouldStayInvalid() {
    let validator = ContentValidator::new();
    let content = "# Launch\n\nA revolutionary sensor.\n\n[Insert pricing here]";

    let (first, second) = round_trip(&validator, content);

    assert!(!first.validation.is_valid);
    assert!(!second.validation.is_valid);
    assert_eq!(first.validation.errors, second.validation.errors);
}

/// Test that empty content round trips to empty content
#[test]
fn test_roundTrip_withEmptyContent_shouldStayEmpty() {
    let validator = ContentValidator::new();

    let (first, second) = round_trip(&validator, "   \n\n  ");

    assert!(first.to_canonical_text().is_empty());
    assert!(second.paragraphs.is_empty());
    assert_eq!(first.validation.score, second.validation.score);
}

/// Test that canonical text restores headings and terms missing from the paragraphs
#[test]
fn test_toCanonicalText_withDetachedParts_shouldRestoreThem() {
    let validator = ContentValidator::new();
    let parsed = ParsedContent {
        headings: vec!["Overview".to_string()],
        paragraphs: vec!["Text about our device.".to_string()],
        medical_terms: vec!["FeNO".to_string()],
        key_phrases: vec!["early detection".to_string()],
        validation: ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            score: 100,
        },
    };

    let canonical = parsed.to_canonical_text();
    let reparsed = validator.parse_content(&canonical);

    assert_eq!(
        canonical,
        "# Overview\n\nText about our device.\n\nTerminology: FeNO, early detection"
    );
    assert_eq!(reparsed.headings, parsed.headings);
    assert_eq!(reparsed.medical_terms, parsed.medical_terms);
    assert_eq!(reparsed.key_phrases, parsed.key_phrases);
}
