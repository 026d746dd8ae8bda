/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use copylint::file_utils::{FileKind, FileManager};
use std::fs;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "copy.md", "# Title")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested)?;
    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));
    Ok(())
}

/// Test that find_files matches extensions case-insensitively and sorts results
#[test]
fn test_find_files_withMixedExtensions_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.html", "<p>b</p>")?;
    common::create_test_file(root, "a.HTM", "<p>a</p>")?;
    common::create_test_file(root, "nested/c.jsx", "<div />")?;
    common::create_test_file(root, "notes.md", "# notes")?;

    let files = FileManager::find_files(root, &["html", ".htm", "jsx"])?;

    assert_eq!(
        files,
        vec![root.join("a.HTM"), root.join("b.html"), root.join("nested/c.jsx")]
    );
    Ok(())
}

/// Test that collect_inputs filters a directory by kind
#[test]
fn test_collect_inputs_withDirectory_shouldFilterByKind() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "home.md", "# Home")?;
    common::create_test_file(root, "about.txt", "About us")?;
    common::create_test_file(root, "index.html", "<main></main>")?;

    let prose = FileManager::collect_inputs(root, FileKind::Prose)?;
    let markup = FileManager::collect_inputs(root, FileKind::Markup)?;

    assert_eq!(prose, vec![root.join("about.txt"), root.join("home.md")]);
    assert_eq!(markup, vec![root.join("index.html")]);
    Ok(())
}

/// Test that a single file is returned as-is regardless of kind
#[test]
fn test_collect_inputs_withFile_shouldReturnIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "page.unknown", "x")?;

    assert_eq!(FileManager::collect_inputs(&file, FileKind::Markup)?, vec![file]);
    Ok(())
}

/// Test writing then reading a file in a new directory
#[test]
fn test_write_to_file_withMissingParent_shouldCreateAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("index.html");

    FileManager::write_to_file(&path, "<main></main>\n")?;

    assert_eq!(FileManager::read_to_string(&path)?, "<main></main>\n");
    assert_eq!(fs::read_to_string(&path)?, "<main></main>\n");
    Ok(())
}

/// Test that reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let error = FileManager::read_to_string("missing/copy.md").unwrap_err();

    assert!(error.to_string().contains("Failed to read file"));
}
