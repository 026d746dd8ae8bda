/*!
 * Structured extraction from Markdown-style prose.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validator::{ContentValidator, ValidationResult, contains_term};

/// `# Heading` lines
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+[ \t]+(.+)$").expect("Invalid heading regex"));

/// Blank lines between paragraphs
static PARAGRAPH_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph regex"));

/// Content split into its structural parts, with its validation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedContent {
    /// Heading texts in document order
    pub headings: Vec<String>,
    /// Non-empty blocks separated by blank lines
    pub paragraphs: Vec<String>,
    /// Configured medical terms present in the content
    pub medical_terms: Vec<String>,
    /// Configured key phrases present in the content
    pub key_phrases: Vec<String>,
    /// Validation of the whole content
    pub validation: ValidationResult,
}

impl ContentValidator {
    /// Extract headings, paragraphs, medical terms and key phrases from
    /// `content` and validate it
    pub fn parse_content(&self, content: &str) -> ParsedContent {
        let headings = HEADING_REGEX
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end().to_string())
            .collect();

        let paragraphs = PARAGRAPH_BREAK_REGEX
            .split(content)
            .filter(|paragraph| !paragraph.trim().is_empty())
            .map(str::to_string)
            .collect();

        let lower = content.to_lowercase();
        let guidelines = self.guidelines();
        let medical_terms = guidelines
            .medical_terms
            .iter()
            .filter(|term| contains_term(&lower, term))
            .cloned()
            .collect();
        let key_phrases = guidelines
            .key_phrases
            .iter()
            .filter(|phrase| contains_term(&lower, phrase))
            .cloned()
            .collect();

        ParsedContent {
            headings,
            paragraphs,
            medical_terms,
            key_phrases,
            validation: self.validate_content(content),
        }
    }
}

impl ParsedContent {
    /// Reconstruct a canonical text form.
    ///
    /// Paragraphs are joined with blank lines. Headings, terms and phrases
    /// that the paragraphs do not already contain are added so that parsing
    /// the result extracts them again.
    pub fn to_canonical_text(&self) -> String {
        let body = self.paragraphs.join("\n\n");
        let lower = body.to_lowercase();

        let mut sections: Vec<String> = self
            .headings
            .iter()
            .filter(|heading| !body.contains(heading.as_str()))
            .map(|heading| format!("# {heading}"))
            .collect();

        if !body.is_empty() {
            sections.push(body.clone());
        }

        let missing: Vec<&str> = self
            .medical_terms
            .iter()
            .chain(&self.key_phrases)
            .filter(|term| !contains_term(&lower, term))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            sections.push(format!("Terminology: {}", missing.join(", ")));
        }

        sections.join("\n\n")
    }
}
