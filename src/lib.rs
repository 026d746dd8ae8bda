/*!
 * # copylint
 *
 * A Rust library for keeping website copy and markup in shape.
 *
 * ## Features
 *
 * - Score prose against brand guidelines:
 *   - forbidden hype vocabulary and placeholder text
 *   - tone keywords and medical terminology coverage
 *   - sentence length
 * - Extract headings, paragraphs, medical terms and key phrases
 * - Validate semantic HTML structure (landmarks, headings, lists, forms,
 *   tables, ARIA)
 * - Pretty-print, minify and balance-check HTML and JSX-like markup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `content`: Brand compliance scoring and content parsing
 * - `semantic`: Semantic structure validation
 * - `markup`: Tokenizer, tag balance checking and pretty printer
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * Every validator and formatter is a pure function over its input string
 * and an immutable policy, so instances can be shared freely across threads.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod content;
pub mod errors;
pub mod file_utils;
pub mod markup;
pub mod semantic;

// Re-export main types for easier usage
pub use app_config::Config;
pub use content::{BrandGuidelines, ContentValidator, ParsedContent, ScoringWeights, ValidationResult};
pub use errors::{AppError, MarkupError, TokenizeError};
pub use markup::{FormattingOptions, PrettyPrinter, format_html, format_jsx, minify_html};
pub use semantic::{SemanticValidationResult, SemanticValidator, SemanticWeights};
