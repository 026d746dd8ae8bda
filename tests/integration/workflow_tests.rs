/*!
 * End-to-end workflows: configuration, file discovery, validation and formatting
 */

use anyhow::Result;
use copylint::app_config::Config;
use copylint::content::ContentValidator;
use copylint::errors::{AppError, MarkupError};
use copylint::file_utils::{FileKind, FileManager};
use copylint::markup::PrettyPrinter;
use copylint::semantic::SemanticValidator;
use crate::common;

/// Test checking a directory of copy with a customised policy
#[test]
fn test_checkWorkflow_withCustomConfig_shouldScoreEachFile() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    let config_path = common::create_test_file(
        root,
        "copylint.json",
        r#"{ "content": { "guidelines": { "forbidden_terms": ["synergy"] } } }"#,
    )?;
    common::create_test_file(root, "copy/good.md", common::COMPLIANT_COPY)?;
    common::create_test_file(root, "copy/bad.md", "Clinical synergy for your airway.")?;
    common::create_test_file(root, "copy/revolutionary.txt", "A revolutionary, reliable sensor.")?;

    let config = Config::from_file(&config_path)?;
    config.validate()?;
    let validator = ContentValidator::with_config(
        config.content.guidelines.clone(),
        config.content.weights.clone(),
    );

    let files = FileManager::collect_inputs(root.join("copy"), FileKind::Prose)?;
    let results: Vec<_> = files
        .iter()
        .map(|file| FileManager::read_to_string(file).map(|text| validator.validate_content(&text)))
        .collect::<Result<_>>()?;

    assert_eq!(files.len(), 3);
    assert!(!results[0].is_valid, "bad.md uses the configured forbidden term");
    assert!(results[1].is_valid);
    assert_eq!(results[1].score, 100);
    assert!(results[2].is_valid, "default terms were replaced by the config");
    Ok(())
}

/// Test formatting markup files in place and checking them afterwards
#[test]
fn test_formatWorkflow_writeThenCheck_shouldBeStable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "index.html", common::WELL_STRUCTURED_PAGE)?;
    common::create_test_file(root, "partials/card.html", "<div><p>Card <em>body</em></p></div>")?;
    let printer = PrettyPrinter::with_options(Config::default().formatting);

    let files = FileManager::collect_inputs(root, FileKind::Markup)?;
    for file in &files {
        let source = FileManager::read_to_string(file)?;
        let formatted = printer.format_html(&source)?;
        FileManager::write_to_file(file, &format!("{formatted}\n"))?;
    }

    for file in &files {
        let source = FileManager::read_to_string(file)?;
        let formatted = printer.format_html(&source)?;
        assert_eq!(format!("{formatted}\n"), source, "{:?} is not stable", file);
    }
    assert_eq!(
        FileManager::read_to_string(root.join("partials/card.html"))?,
        "<div>\n  <p>\n    Card <em>body</em>\n  </p>\n</div>\n"
    );
    Ok(())
}

/// Test that formatted pages keep their semantic score
#[test]
fn test_semanticWorkflow_afterFormatting_shouldKeepScore() -> Result<()> {
    let printer = PrettyPrinter::new();
    let validator = SemanticValidator::new();

    let before = validator.validate_semantic_structure(common::WELL_STRUCTURED_PAGE);
    let formatted = printer.format_html(common::WELL_STRUCTURED_PAGE)?;
    let after = validator.validate_semantic_structure(&formatted);

    assert_eq!(before.score, after.score);
    assert_eq!(before.errors, after.errors);
    assert_eq!(before.warnings, after.warnings);
    Ok(())
}

/// Test that markup failures convert into the application error
#[test]
fn test_formatWorkflow_withBrokenMarkup_shouldSurfaceAppError() {
    let printer = PrettyPrinter::new();

    let error: AppError = printer
        .format_html("<main><section></main>")
        .map_err(AppError::from)
        .unwrap_err();

    assert!(matches!(error, AppError::Markup(MarkupError::Mismatched { .. })));
    assert!(error.to_string().starts_with("Pretty printer error: Mismatched tags"));
}

/// Test that parse results serialize to JSON for reporting
#[test]
fn test_parseWorkflow_shouldSerializeToJson() -> Result<()> {
    let validator = ContentValidator::new();

    let parsed = validator.parse_content("# Evidence\n\nFeNO monitoring supports early detection.");
    let json = serde_json::to_value(&parsed)?;

    assert_eq!(json["headings"][0], "Evidence");
    assert_eq!(json["validation"]["is_valid"], true);
    assert!(json["medical_terms"].as_array().is_some_and(|terms| terms.len() >= 2));
    Ok(())
}
