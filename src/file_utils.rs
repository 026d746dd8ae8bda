use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Extensions treated as prose
const PROSE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Extensions treated as markup
const MARKUP_EXTENSIONS: &[&str] = &["html", "htm", "jsx", "tsx"];

/// Kind of input file, decided by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Markdown or plain text copy
    Prose,
    /// HTML or JSX markup
    Markup,
    /// Anything else
    Other,
}

impl FileKind {
    /// Extensions belonging to this kind
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Prose => PROSE_EXTENSIONS,
            FileKind::Markup => MARKUP_EXTENSIONS,
            FileKind::Other => &[],
        }
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @returns: Kind of file by extension
    pub fn detect_file_kind<P: AsRef<Path>>(path: P) -> FileKind {
        let Some(ext) = path.as_ref().extension() else {
            return FileKind::Other;
        };
        let ext = ext.to_string_lossy().to_lowercase();

        if PROSE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Prose
        } else if MARKUP_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Markup
        } else {
            FileKind::Other
        }
    }

    /// Find files with any of `extensions` in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy();
                let wanted = extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext));
                if wanted {
                    result.push(path.to_path_buf());
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Files of `kind` at `path`: the file itself, or every match under a directory
    pub fn collect_inputs<P: AsRef<Path>>(path: P, kind: FileKind) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if path.is_dir() {
            return Self::find_files(path, kind.extensions());
        }

        Err(anyhow!("Input path does not exist: {:?}", path))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
