/*!
 * Error types for copylint.
 *
 * Content and structure findings are reported as data in validation
 * results, never as errors. The types here cover the failure modes that
 * callers must handle: malformed markup handed to the formatter, and
 * configuration or file problems in the command line front-end.
 */

use thiserror::Error;

/// Errors raised while splitting markup into tokens in strict mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A `<tag` was opened but never closed with `>`
    #[error("unterminated tag starting at byte {offset}")]
    UnterminatedTag {
        /// Byte offset of the opening `<`
        offset: usize,
    },

    /// A `<!--` comment was never closed with `-->`
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the opening `<!--`
        offset: usize,
    },
}

/// Structural errors found in markup handed to the pretty printer.
///
/// HTML formatting failures render with the `Pretty printer error:` prefix
/// and JSX formatting failures with `JSX formatter error:`, so callers can
/// recognise formatter failures from the message alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A closing tag did not match the innermost open element
    #[error("Pretty printer error: Mismatched tags: expected </{expected}>, found </{found}>")]
    Mismatched {
        /// Name of the innermost open element
        expected: String,
        /// Name on the offending closing tag
        found: String,
    },

    /// A closing tag appeared with no element open
    #[error("Pretty printer error: Unexpected closing tag </{found}> with no open element")]
    UnexpectedClose {
        /// Name on the offending closing tag
        found: String,
    },

    /// Elements still open at the end of input
    #[error("Pretty printer error: Unclosed tags: {}", .tags.join(", "))]
    Unclosed {
        /// Open element names, outermost first
        tags: Vec<String>,
    },

    /// The input could not be tokenized
    #[error("Pretty printer error: {0}")]
    Tokenize(#[from] TokenizeError),

    /// JSX input could not be tokenized
    #[error("JSX formatter error: {0}")]
    Jsx(TokenizeError),
}

impl MarkupError {
    /// Tag names involved in the failure
    pub fn tags(&self) -> Vec<&str> {
        match self {
            MarkupError::Mismatched { expected, found } => vec![expected.as_str(), found.as_str()],
            MarkupError::UnexpectedClose { found } => vec![found.as_str()],
            MarkupError::Unclosed { tags } => tags.iter().map(String::as_str).collect(),
            MarkupError::Tokenize(_) | MarkupError::Jsx(_) => vec![],
        }
    }
}

/// Main application error type used by the command line front-end
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Markup could not be formatted
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
