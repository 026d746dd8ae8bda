/*!
 * Tests for the markup pretty printer
 */

use copylint::errors::MarkupError;
use copylint::markup::{FormattingOptions, PrettyPrinter, format_html, format_jsx, minify_html};
use crate::common;

/// Test that block children are indented one level per nesting depth
#[test]
fn test_formatHtml_withSectionHeading_shouldIndentEachLevel() {
    let formatted = format_html("<section><h1>Title</h1></section>", None).unwrap();

    assert_eq!(formatted, "<section>\n  <h1>\n    Title\n  </h1>\n</section>");
}

/// Test that custom indentation width is honored
#[test]
fn test_formatHtml_withFourSpaceIndent_shouldUseIt() {
    let options = FormattingOptions {
        indent_size: 4,
        ..Default::default()
    };

    let formatted = format_html("<div><span>x</span></div>", Some(&options)).unwrap();

    assert_eq!(formatted, "<div>\n    <span>x</span>\n</div>");
}

/// Test that unclosed elements are reported in opening order
#[test]
fn test_formatHtml_withUnclosedTags_shouldListThem() {
    let error = format_html("<div><p>text", None).unwrap_err();

    assert!(matches!(error, MarkupError::Unclosed { .. }));
    assert_eq!(error.tags(), vec!["div", "p"]);
    assert!(error.to_string().starts_with("Pretty printer error: "));
}

/// Test that a stray closing tag is reported
#[test]
fn test_formatHtml_withStrayClosingTag_shouldFail() {
    let error = format_html("<p>x</p></div>", None).unwrap_err();

    assert_eq!(
        error,
        MarkupError::UnexpectedClose {
            found: "div".to_string()
        }
    );
}

/// Test that a full document formats into valid, stable HTML5
#[test]
fn test_formatHtml_withFullDocument_shouldStayValidAndStable() {
    common::init_logging();
    let printer = PrettyPrinter::new();

    let once = printer.format_html(common::WELL_STRUCTURED_PAGE).unwrap();
    let twice = printer.format_html(&once).unwrap();

    assert_eq!(once, twice);
    assert!(once.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>"));
    assert!(printer.is_valid_html5(&once));
}

/// Test that every line respects the width limit when words are short
#[test]
fn test_formatHtml_withLongParagraph_shouldWrapUnderLimit() {
    let options = FormattingOptions {
        max_line_length: 40,
        ..Default::default()
    };
    let text = "breath ".repeat(40);
    let markup = format!("<main><p>{}</p></main>", text);

    let formatted = format_html(&markup, Some(&options)).unwrap();

    assert!(formatted.lines().count() > 5);
    assert!(formatted.lines().all(|line| line.chars().count() < 40));
}

/// Test that a JSX fragment does not need to balance
#[test]
fn test_formatJsx_withFragment_shouldSucceed() {
    let formatted = format_jsx("<li className=\"item\">{item.name}", None).unwrap();

    assert_eq!(formatted, "<li class=\"item\">\n  {item.name}");
}

/// Test that JSX with an unterminated expression tag fails
#[test]
fn test_formatJsx_withUnterminatedTag_shouldFail() {
    let error = format_jsx("<div onClick={() => go()}", None).unwrap_err();

    assert!(matches!(error, MarkupError::Jsx(_)));
    assert!(error.to_string().starts_with("JSX formatter error: "));
}

/// Test that minifying tolerates unterminated markup
#[test]
fn test_minifyHtml_withUnterminatedTag_shouldKeepItAsText() {
    let minified = minify_html("<p> a </p>\n<div");

    assert_eq!(minified, "<p> a </p><div");
}

/// Test that minifying then formatting matches formatting directly
#[test]
fn test_minifyThenFormat_shouldMatchDirectFormat() {
    let printer = PrettyPrinter::new();
    let markup = "<main>\n  <h1>Title</h1>\n  <ul>\n    <li>One</li>\n    <li>Two</li>\n  </ul>\n</main>";

    let direct = printer.format_html(markup).unwrap();
    let via_minify = printer.format_html(&printer.minify_html(markup)).unwrap();

    assert_eq!(direct, via_minify);
}

/// Test doctype checks in is_valid_html5
#[test]
fn test_isValidHtml5_withLegacyDoctype_shouldReject() {
    let printer = PrettyPrinter::new();
    let legacy = "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"><html><head></head><body></body></html>";

    assert!(!printer.is_valid_html5(legacy));
    assert!(printer.is_valid_html5("<!doctype HTML><html><head></head><body></body></html>"));
}
