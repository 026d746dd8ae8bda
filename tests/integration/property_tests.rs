/*!
 * Property-based tests for the validators and the pretty printer
 */

use copylint::content::{BrandGuidelines, ContentValidator};
use copylint::markup::{FormattingOptions, PrettyPrinter, Token, tokenize};
use copylint::semantic::SemanticValidator;
use proptest::prelude::*;
use std::collections::BTreeSet;

const PLACEHOLDER_SAMPLES: &[&str] = &[
    "Lorem ipsum dolor sit amet",
    "[Insert content here]",
    "TBD - to be determined",
];

const VOCABULARY: &[&str] = &[
    "our", "sensor", "measures", "FeNO", "in", "exhaled", "breath", "for", "early", "detection",
    "of", "airway", "inflammation", "with", "clinical", "validation", "reliable", "results",
    "patients", "trust", "monitoring", "asthma", "calm", "precise",
];

/// A few lowercase words separated by single spaces
fn text() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,5}"
}

/// Balanced markup built from block, inline and void elements
fn fragment() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        4 => text(),
        1 => Just("<br>".to_string()),
        1 => Just("<img src=\"a.png\" alt=\"\">".to_string()),
    ];

    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::sample::select(vec!["div", "section", "p", "ul", "li", "span", "strong", "em", "a"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| format!("<{tag}>{}</{tag}>", children.join(" ")))
    })
}

/// Markdown-style copy with headings and paragraphs separated by blank lines,
/// with irregular blank lines around and between blocks
fn document() -> impl Strategy<Value = String> {
    let paragraph = prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 1..30)
        .prop_map(|words| words.join(" "));
    let block = prop_oneof![
        1 => "[A-Z][a-z]{2,10}".prop_map(|heading| format!("## {heading}")),
        3 => paragraph,
    ];

    (
        "[ \t\n]{0,6}",
        prop::collection::vec(block, 1..8),
        "\n[ \t]*\n[\n ]{0,4}",
        "[ \t\n]{0,6}",
    )
        .prop_map(|(leading, blocks, separator, trailing)| {
            format!("{leading}{}{trailing}", blocks.join(&separator))
        })
}

fn as_set(items: &[String]) -> BTreeSet<String> {
    items.iter().cloned().collect()
}

proptest! {
    /// Property: validation is a pure function of its input
    #[test]
    fn test_validateContent_calledTwice_shouldBeIdentical(content in "\\PC{0,300}") {
        let validator = ContentValidator::new();

        let first = validator.validate_content(&content);
        let second = validator.validate_content(&content);

        prop_assert_eq!(first, second);
    }

    /// Property: any error makes the content invalid, and no error keeps it valid
    #[test]
    fn test_validateContent_withAnyInput_shouldTieValidityToErrors(content in "\\PC{0,300}") {
        let result = ContentValidator::new().validate_content(&content);

        prop_assert_eq!(result.is_valid, result.errors.is_empty());
        prop_assert!(result.score <= 100);
    }

    /// Property: a forbidden term is always reported by name
    #[test]
    fn test_validateContent_withForbiddenTerm_shouldAlwaysReportIt(
        base in "\\PC{0,200}",
        term in prop::sample::select(BrandGuidelines::default().forbidden_terms),
    ) {
        let content = format!("{base} This is {term} technology.");

        let result = ContentValidator::new().validate_content(&content);

        prop_assert!(!result.is_valid);
        prop_assert!(!result.errors.is_empty());
        let errors = result.errors.join(" ").to_lowercase();
        prop_assert!(errors.contains(&term.to_lowercase()));
    }

    /// Property: appended placeholder text is always an error
    #[test]
    fn test_validateContent_withPlaceholder_shouldAlwaysReportIt(
        base in "\\PC{0,200}",
        placeholder in prop::sample::select(PLACEHOLDER_SAMPLES.to_vec()),
    ) {
        let content = format!("{base} {placeholder}");

        let result = ContentValidator::new().validate_content(&content);

        prop_assert!(!result.is_valid);
        prop_assert!(result.errors.iter().any(|e| e.to_lowercase().contains("placeholder")));
    }

    /// Property: formatting its own output changes nothing
    #[test]
    fn test_formatHtml_appliedTwice_shouldBeIdempotent(
        markup in fragment(),
        max_line_length in 10usize..120,
    ) {
        let printer = PrettyPrinter::with_options(FormattingOptions {
            max_line_length,
            ..Default::default()
        });

        let once = printer.format_html(&markup).unwrap();
        let twice = printer.format_html(&once).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// Property: formatted output opens exactly as many elements as it closes
    #[test]
    fn test_formatHtml_withBalancedInput_shouldKeepTagCounts(markup in fragment()) {
        let options = FormattingOptions::default();
        let formatted = PrettyPrinter::with_options(options.clone()).format_html(&markup).unwrap();

        let tokens = tokenize(&formatted, &options.self_closing_tags, &options.preserve_whitespace).unwrap();
        let opening = tokens.iter().filter(|t| matches!(t, Token::OpeningTag { .. })).count();
        let closing = tokens.iter().filter(|t| matches!(t, Token::ClosingTag { .. })).count();

        prop_assert_eq!(opening, closing);
        prop_assert_eq!(opening, markup.matches("</").count());
    }

    /// Property: substantial content without a main landmark never scores full marks
    #[test]
    fn test_validateSemantic_withoutMain_shouldScoreBelowFull(
        words in prop::collection::vec("[a-z]{3,9}", 120..200),
    ) {
        let html = format!("<div><h1>Title</h1><p>{}</p></div>", words.join(" "));

        let result = SemanticValidator::new().validate_semantic_structure(&html);

        prop_assert!(result.score < 100);
        prop_assert!(result.errors.iter().any(|e| e.contains("<main>")));
    }

    /// Property: a main landmark with one h1 and nested sections scores at least 90
    #[test]
    fn test_validateSemantic_withSectionedMain_shouldScoreHigh(
        sections in prop::collection::vec(text(), 1..6),
    ) {
        let body: String = sections
            .iter()
            .map(|paragraph| format!("<section><h2>Part</h2><p>{paragraph}</p></section>"))
            .collect();
        let html = format!("<main><h1>Title</h1>{body}</main>");

        let result = SemanticValidator::new().validate_semantic_structure(&html);

        prop_assert!(result.errors.is_empty());
        prop_assert!(result.score >= 90);
    }

    /// Property: re-parsing the canonical text keeps terms, phrases and score
    #[test]
    fn test_parseContent_roundTrip_shouldKeepTermsAndScore(content in document()) {
        let validator = ContentValidator::new();

        let first = validator.parse_content(&content);
        let second = validator.parse_content(&first.to_canonical_text());

        prop_assert_eq!(as_set(&first.medical_terms), as_set(&second.medical_terms));
        prop_assert_eq!(as_set(&first.key_phrases), as_set(&second.key_phrases));
        prop_assert!(first.validation.score.abs_diff(second.validation.score) <= 5);
    }
}
