/*!
 * Scoring weights for content validation.
 *
 * The penalties and thresholds are empirical policy values. They are kept
 * as configuration so alternate policies can be loaded from the config file
 * without touching the scoring code.
 */

use serde::{Deserialize, Serialize};

/// Penalties and thresholds applied by the content validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points deducted per distinct forbidden term
    #[serde(default = "default_forbidden_term_penalty")]
    pub forbidden_term_penalty: f64,

    /// Points deducted per distinct placeholder match
    #[serde(default = "default_placeholder_penalty")]
    pub placeholder_penalty: f64,

    /// Tone compliance percentage below which a warning is raised
    #[serde(default = "default_tone_threshold")]
    pub tone_threshold: f64,

    /// Points deducted per percentage point of tone shortfall
    #[serde(default = "default_tone_penalty_factor")]
    pub tone_penalty_factor: f64,

    /// Words per expected tone keyword hit
    #[serde(default = "default_tone_words_per_unit")]
    pub tone_words_per_unit: f64,

    /// Medical terminology percentage below which a warning is raised
    #[serde(default = "default_medical_threshold")]
    pub medical_threshold: f64,

    /// Points deducted per percentage point of terminology shortfall
    #[serde(default = "default_medical_penalty_factor")]
    pub medical_penalty_factor: f64,

    /// Words per expected medical term hit
    #[serde(default = "default_medical_words_per_unit")]
    pub medical_words_per_unit: f64,

    /// Content must be longer than this many characters, with whitespace runs
    /// counted as one space, for the terminology check
    #[serde(default = "default_medical_min_length")]
    pub medical_min_length: usize,

    /// Sentences with more words than this are flagged
    #[serde(default = "default_max_sentence_words")]
    pub max_sentence_words: usize,

    /// Points deducted per long sentence
    #[serde(default = "default_long_sentence_penalty")]
    pub long_sentence_penalty: f64,

    /// Points deducted for empty or whitespace-only content
    #[serde(default = "default_empty_content_penalty")]
    pub empty_content_penalty: f64,

    /// Scores below this trigger the general suggestions
    #[serde(default = "default_suggestion_score_threshold")]
    pub suggestion_score_threshold: f64,

    /// Tone percentages below this trigger the voice keyword suggestion
    #[serde(default = "default_suggestion_tone_threshold")]
    pub suggestion_tone_threshold: f64,

    /// Terminology percentages below this trigger the medical term suggestion
    #[serde(default = "default_suggestion_medical_threshold")]
    pub suggestion_medical_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            forbidden_term_penalty: default_forbidden_term_penalty(),
            placeholder_penalty: default_placeholder_penalty(),
            tone_threshold: default_tone_threshold(),
            tone_penalty_factor: default_tone_penalty_factor(),
            tone_words_per_unit: default_tone_words_per_unit(),
            medical_threshold: default_medical_threshold(),
            medical_penalty_factor: default_medical_penalty_factor(),
            medical_words_per_unit: default_medical_words_per_unit(),
            medical_min_length: default_medical_min_length(),
            max_sentence_words: default_max_sentence_words(),
            long_sentence_penalty: default_long_sentence_penalty(),
            empty_content_penalty: default_empty_content_penalty(),
            suggestion_score_threshold: default_suggestion_score_threshold(),
            suggestion_tone_threshold: default_suggestion_tone_threshold(),
            suggestion_medical_threshold: default_suggestion_medical_threshold(),
        }
    }
}

impl ScoringWeights {
    /// Names of weights that are negative or not finite
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("forbidden_term_penalty", self.forbidden_term_penalty),
            ("placeholder_penalty", self.placeholder_penalty),
            ("tone_threshold", self.tone_threshold),
            ("tone_penalty_factor", self.tone_penalty_factor),
            ("tone_words_per_unit", self.tone_words_per_unit),
            ("medical_threshold", self.medical_threshold),
            ("medical_penalty_factor", self.medical_penalty_factor),
            ("medical_words_per_unit", self.medical_words_per_unit),
            ("long_sentence_penalty", self.long_sentence_penalty),
            ("empty_content_penalty", self.empty_content_penalty),
            ("suggestion_score_threshold", self.suggestion_score_threshold),
            ("suggestion_tone_threshold", self.suggestion_tone_threshold),
            ("suggestion_medical_threshold", self.suggestion_medical_threshold),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Keyword hits as a percentage of the hits expected for `word_count` words.
///
/// One hit is expected per `words_per_unit` words, and never fewer than one
/// hit overall. The result is capped at 100 and rounded.
pub fn coverage_percentage(hits: usize, word_count: usize, words_per_unit: f64) -> f64 {
    let expected = if words_per_unit > 0.0 {
        (word_count as f64 / words_per_unit).max(1.0)
    } else {
        1.0
    };
    (hits as f64 / expected * 100.0).min(100.0).round()
}

fn default_forbidden_term_penalty() -> f64 {
    15.0
}

fn default_placeholder_penalty() -> f64 {
    20.0
}

fn default_tone_threshold() -> f64 {
    60.0
}

fn default_tone_penalty_factor() -> f64 {
    0.5
}

fn default_tone_words_per_unit() -> f64 {
    50.0
}

fn default_medical_threshold() -> f64 {
    40.0
}

fn default_medical_penalty_factor() -> f64 {
    0.3
}

fn default_medical_words_per_unit() -> f64 {
    100.0
}

fn default_medical_min_length() -> usize {
    100
}

fn default_max_sentence_words() -> usize {
    25
}

fn default_long_sentence_penalty() -> f64 {
    2.0
}

fn default_empty_content_penalty() -> f64 {
    60.0
}

fn default_suggestion_score_threshold() -> f64 {
    80.0
}

fn default_suggestion_tone_threshold() -> f64 {
    70.0
}

fn default_suggestion_medical_threshold() -> f64 {
    50.0
}
