/*!
 * Brand compliance scoring for prose.
 *
 * A score starts at 100 and only ever decreases:
 * - forbidden hype terms and placeholder text are errors and make content invalid
 * - weak tone, sparse medical terminology and long sentences are warnings
 *   that lower the score without invalidating the content
 *
 * Validation is a pure function of the content and the configured policy.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::guidelines::BrandGuidelines;
use super::scoring::{ScoringWeights, coverage_percentage};

/// Patterns that indicate unfinished copy, matched in this order
static PLACEHOLDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)lorem ipsum",
        r"(?i)placeholder",
        r"(?i)sample text",
        r"(?i)dummy text",
        r"\[.*?\]",
        r"\{.*?\}",
        r"(?i)xxx+",
        r"(?i)tbd|to be determined",
        r"(?i)coming soon",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid placeholder regex"))
    .collect()
});

/// Outcome of validating a piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found
    pub is_valid: bool,
    /// Problems that make the content invalid
    pub errors: Vec<String>,
    /// Problems that only lower the score
    pub warnings: Vec<String>,
    /// Brand compliance score, 0 to 100
    pub score: u32,
}

/// Everything computed while scoring content
struct ContentReport {
    result: ValidationResult,
    tone: f64,
    medical: f64,
    forbidden: Vec<String>,
    placeholders: Vec<String>,
}

/// Validates prose against brand guidelines
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    guidelines: BrandGuidelines,
    weights: ScoringWeights,
}

impl ContentValidator {
    /// Create a validator with the default guidelines and weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom guidelines
    pub fn with_guidelines(guidelines: BrandGuidelines) -> Self {
        Self::with_config(guidelines, ScoringWeights::default())
    }

    /// Create a validator with custom guidelines and weights
    pub fn with_config(guidelines: BrandGuidelines, weights: ScoringWeights) -> Self {
        Self { guidelines, weights }
    }

    /// Guidelines in use
    pub fn guidelines(&self) -> &BrandGuidelines {
        &self.guidelines
    }

    /// Weights in use
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `content` against the brand guidelines
    pub fn validate_content(&self, content: &str) -> ValidationResult {
        self.analyze(content).result
    }

    /// Actionable suggestions for improving `content`.
    ///
    /// Always non-empty when the score is below the suggestion threshold.
    pub fn suggest_improvements(&self, content: &str) -> Vec<String> {
        let report = self.analyze(content);
        let weights = &self.weights;
        let mut suggestions = Vec::new();

        if !report.forbidden.is_empty() {
            suggestions.push(format!(
                "Replace hype terms ({}) with measured, evidence-based language",
                report.forbidden.join(", ")
            ));
        }

        if !report.placeholders.is_empty() {
            suggestions.push(format!(
                "Replace placeholder content ({}) with final copy",
                report.placeholders.join(", ")
            ));
        }

        if f64::from(report.result.score) < weights.suggestion_score_threshold {
            suggestions.push("Consider adding more medical terminology to increase credibility".to_string());
            suggestions.push(
                "Use more precise, measurable language (e.g., \"94% accuracy\" instead of \"highly accurate\")"
                    .to_string(),
            );
            suggestions.push("Include calm, reassuring language to reduce patient anxiety".to_string());
        }

        if report.tone < weights.suggestion_tone_threshold {
            if self.guidelines.voice_attributes.is_empty() {
                suggestions.push("Add more brand voice keywords to match the intended tone".to_string());
            } else {
                suggestions.push(format!(
                    "Add more brand voice keywords: {}",
                    self.guidelines.voice_attributes.join(", ")
                ));
            }
        }

        if report.medical < weights.suggestion_medical_threshold {
            let examples: Vec<&str> = self
                .guidelines
                .medical_terms
                .iter()
                .take(4)
                .map(String::as_str)
                .collect();
            if examples.is_empty() {
                suggestions.push("Include relevant medical terminology".to_string());
            } else {
                suggestions.push(format!("Include relevant medical terms: {}, etc.", examples.join(", ")));
            }
        }

        suggestions
    }

    /// Percentage of expected tone keyword hits found in `content`
    pub fn assess_tone_compliance(&self, content: &str) -> u32 {
        let lower = content.to_lowercase();
        self.tone_score(&lower, word_count(content)) as u32
    }

    /// Percentage of expected medical term hits found in `content`
    pub fn assess_medical_terminology(&self, content: &str) -> u32 {
        let lower = content.to_lowercase();
        self.medical_score(&lower, word_count(content)) as u32
    }

    fn analyze(&self, content: &str) -> ContentReport {
        let weights = &self.weights;
        let lower = content.to_lowercase();
        let words = word_count(content);

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut score = 100.0;

        let forbidden = self.find_forbidden_terms(&lower);
        if !forbidden.is_empty() {
            errors.push(format!(
                "Forbidden startup hype terms found: {}",
                forbidden.join(", ")
            ));
            score -= forbidden.len() as f64 * weights.forbidden_term_penalty;
        }

        let tone = self.tone_score(&lower, words);
        if tone < weights.tone_threshold {
            warnings.push(format!(
                "Tone compliance below threshold ({tone}%). Consider adding more medical, calm, reassuring, or precise language."
            ));
            score -= (weights.tone_threshold - tone) * weights.tone_penalty_factor;
        }

        let medical = self.medical_score(&lower, words);
        if medical < weights.medical_threshold && text_length(content) > weights.medical_min_length {
            warnings.push(format!(
                "Low medical terminology usage ({medical}%). Consider adding relevant medical terms for credibility."
            ));
            score -= (weights.medical_threshold - medical) * weights.medical_penalty_factor;
        }

        let placeholders = find_placeholders(content);
        if !placeholders.is_empty() {
            errors.push(format!(
                "Placeholder content found: {}",
                placeholders.join(", ")
            ));
            score -= placeholders.len() as f64 * weights.placeholder_penalty;
        }

        let long_sentences = count_long_sentences(content, weights.max_sentence_words);
        if long_sentences > 0 {
            warnings.push(format!(
                "{long_sentences} sentences exceed {} words. Consider breaking into shorter, clearer sentences.",
                weights.max_sentence_words
            ));
            score -= long_sentences as f64 * weights.long_sentence_penalty;
        }

        if content.trim().is_empty() {
            warnings.push("Content is empty. Add copy before publishing.".to_string());
            score -= weights.empty_content_penalty;
        }

        let result = ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            score: f64::max(score, 0.0).round() as u32,
        };

        debug!(
            "Validated content ({} words): score {}, {} errors, {} warnings",
            words,
            result.score,
            result.errors.len(),
            result.warnings.len()
        );

        ContentReport {
            result,
            tone,
            medical,
            forbidden,
            placeholders,
        }
    }

    /// Configured forbidden terms present in `lower`, in configuration order
    fn find_forbidden_terms(&self, lower: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for term in &self.guidelines.forbidden_terms {
            if contains_term(lower, term) && !found.iter().any(|f| f.eq_ignore_ascii_case(term)) {
                found.push(term.clone());
            }
        }
        found
    }

    fn tone_score(&self, lower: &str, words: usize) -> f64 {
        let hits = self
            .guidelines
            .tone_keywords
            .iter()
            .filter(|keyword| contains_term(lower, keyword))
            .count();
        coverage_percentage(hits, words, self.weights.tone_words_per_unit)
    }

    fn medical_score(&self, lower: &str, words: usize) -> f64 {
        let hits = self
            .guidelines
            .medical_terms
            .iter()
            .filter(|term| contains_term(lower, term))
            .count();
        coverage_percentage(hits, words, self.weights.medical_words_per_unit)
    }
}

/// Case-insensitive substring match of `term` in already-lowercased content
pub(crate) fn contains_term(lower: &str, term: &str) -> bool {
    !term.is_empty() && lower.contains(&term.to_lowercase())
}

fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Character count with surrounding whitespace ignored and inner runs counted as one
fn text_length(content: &str) -> usize {
    let (chars, words) = content
        .split_whitespace()
        .fold((0usize, 0usize), |(chars, words), word| (chars + word.chars().count(), words + 1));
    chars + words.saturating_sub(1)
}

/// Distinct placeholder matches, in pattern order then position
fn find_placeholders(content: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for pattern in PLACEHOLDER_PATTERNS.iter() {
        for m in pattern.find_iter(content) {
            if !found.iter().any(|existing| existing == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
    }
    found
}

/// Number of sentences with more than `max_words` words
fn count_long_sentences(content: &str, max_words: usize) -> usize {
    content
        .split(['.', '!', '?'])
        .filter(|sentence| sentence.split_whitespace().count() > max_words)
        .count()
}
