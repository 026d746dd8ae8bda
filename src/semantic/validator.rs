/*!
 * Semantic HTML structure validation.
 *
 * Rules are applied to a [`SemanticStructure`] profile. Only a missing
 * `<main>` landmark is an error; every other finding is a warning that
 * lowers the score, or a recommendation that does not.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::structure::SemanticStructure;

/// Outcome of validating document structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticValidationResult {
    /// True when no errors were found
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Structure score, 0 to 100
    pub score: u32,
    /// Non-scoring advice
    pub recommendations: Vec<String>,
}

impl SemanticValidationResult {
    fn failure(message: String) -> Self {
        Self {
            is_valid: false,
            errors: vec![message],
            warnings: Vec::new(),
            score: 0,
            recommendations: Vec::new(),
        }
    }
}

/// Penalties and length thresholds for structure validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticWeights {
    #[serde(default = "default_missing_main_penalty")]
    pub missing_main_penalty: f64,

    /// Per heading hierarchy issue
    #[serde(default = "default_heading_penalty")]
    pub heading_penalty: f64,

    #[serde(default = "default_sectioning_penalty")]
    pub sectioning_penalty: f64,

    /// Per list issue
    #[serde(default = "default_list_penalty")]
    pub list_penalty: f64,

    /// Per form issue
    #[serde(default = "default_form_penalty")]
    pub form_penalty: f64,

    /// Per table issue
    #[serde(default = "default_table_penalty")]
    pub table_penalty: f64,

    /// Per ARIA issue
    #[serde(default = "default_aria_penalty")]
    pub aria_penalty: f64,

    /// Markup longer than this (in characters) should use sectioning elements
    #[serde(default = "default_sectioning_min_length")]
    pub sectioning_min_length: usize,

    /// Markup longer than this should signal its main content
    #[serde(default = "default_main_signal_min_length")]
    pub main_signal_min_length: usize,

    /// Buttons are expected to carry labels once there are more than this many
    #[serde(default = "default_max_unlabelled_buttons")]
    pub max_unlabelled_buttons: usize,

    /// Inputs beyond this many call for fieldset grouping
    #[serde(default = "default_max_ungrouped_inputs")]
    pub max_ungrouped_inputs: usize,

    /// Markup longer than this without a skip link gets a recommendation
    #[serde(default = "default_skip_link_min_length")]
    pub skip_link_min_length: usize,
}

impl Default for SemanticWeights {
    fn default() -> Self {
        Self {
            missing_main_penalty: default_missing_main_penalty(),
            heading_penalty: default_heading_penalty(),
            sectioning_penalty: default_sectioning_penalty(),
            list_penalty: default_list_penalty(),
            form_penalty: default_form_penalty(),
            table_penalty: default_table_penalty(),
            aria_penalty: default_aria_penalty(),
            sectioning_min_length: default_sectioning_min_length(),
            main_signal_min_length: default_main_signal_min_length(),
            max_unlabelled_buttons: default_max_unlabelled_buttons(),
            max_ungrouped_inputs: default_max_ungrouped_inputs(),
            skip_link_min_length: default_skip_link_min_length(),
        }
    }
}

impl SemanticWeights {
    /// Names of penalties that are negative or not finite
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("missing_main_penalty", self.missing_main_penalty),
            ("heading_penalty", self.heading_penalty),
            ("sectioning_penalty", self.sectioning_penalty),
            ("list_penalty", self.list_penalty),
            ("form_penalty", self.form_penalty),
            ("table_penalty", self.table_penalty),
            ("aria_penalty", self.aria_penalty),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}

fn default_missing_main_penalty() -> f64 {
    15.0
}

fn default_heading_penalty() -> f64 {
    5.0
}

fn default_sectioning_penalty() -> f64 {
    5.0
}

fn default_list_penalty() -> f64 {
    3.0
}

fn default_form_penalty() -> f64 {
    8.0
}

fn default_table_penalty() -> f64 {
    6.0
}

fn default_aria_penalty() -> f64 {
    4.0
}

fn default_sectioning_min_length() -> usize {
    500
}

fn default_main_signal_min_length() -> usize {
    1000
}

fn default_max_unlabelled_buttons() -> usize {
    2
}

fn default_max_ungrouped_inputs() -> usize {
    3
}

fn default_skip_link_min_length() -> usize {
    2000
}

/// Validates landmark, heading, list, form, table and ARIA structure
#[derive(Debug, Clone, Default)]
pub struct SemanticValidator {
    weights: SemanticWeights,
}

impl SemanticValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: SemanticWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SemanticWeights {
        &self.weights
    }

    /// Validate the structure of `html`.
    ///
    /// Never fails. Unterminated tags and comments are read as text, and
    /// markup that cannot be analyzed at all yields an invalid result with a
    /// zero score and a single descriptive error.
    pub fn validate_semantic_structure(&self, html: &str) -> SemanticValidationResult {
        let structure = match SemanticStructure::analyze(html) {
            Ok(structure) => structure,
            Err(e) => {
                debug!("Semantic analysis failed: {}", e);
                return SemanticValidationResult::failure(format!("Validation error: {}", e));
            }
        };

        let weights = &self.weights;
        let length = html.chars().count();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();
        let mut score = 100.0;

        if !structure.has_main_landmark {
            errors.push("Missing <main> landmark element".to_string());
            score -= weights.missing_main_penalty;
        }

        let heading_issues = heading_hierarchy_issues(&structure.heading_hierarchy);
        score -= heading_issues.len() as f64 * weights.heading_penalty;
        warnings.extend(heading_issues);

        if structure.sections_count == 0 && length > weights.sectioning_min_length {
            warnings.push("Consider using <section> elements to structure content".to_string());
            score -= weights.sectioning_penalty;
        }

        if !structure.has_header_landmark && structure.header_hint {
            recommendations.push("Use <header> element for page header content".to_string());
        }
        if !structure.has_nav_landmark && structure.nav_hint {
            recommendations.push("Use <nav> element for navigation content".to_string());
        }
        if !structure.has_footer_landmark && structure.footer_hint {
            recommendations.push("Use <footer> element for page footer content".to_string());
        }

        let penalized = [
            (self.list_issues(&structure), weights.list_penalty),
            (self.form_issues(&structure), weights.form_penalty),
            (self.table_issues(&structure), weights.table_penalty),
            (self.aria_issues(&structure, length), weights.aria_penalty),
        ];
        for (issues, penalty) in penalized {
            score -= issues.len() as f64 * penalty;
            warnings.extend(issues);
        }

        let result = SemanticValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            score: f64::max(score, 0.0).round() as u32,
            recommendations,
        };

        debug!(
            "Validated structure ({} chars): score {}, {} errors, {} warnings",
            length,
            result.score,
            result.errors.len(),
            result.warnings.len()
        );

        result
    }

    /// General accessibility advice based on what `html` mentions
    pub fn generate_recommendations(&self, html: &str) -> Vec<String> {
        let lower = html.to_lowercase();
        let mut recommendations = Vec::new();

        if !lower.contains("skip") && html.chars().count() > self.weights.skip_link_min_length {
            recommendations.push("Consider adding skip navigation links for keyboard users".to_string());
        }

        if lower.contains("modal") || lower.contains("dialog") {
            recommendations.push("Ensure proper focus management for modal dialogs".to_string());
        }

        if lower.contains("color:") || lower.contains("background") {
            recommendations.push("Verify color contrast ratios meet WCAG AA standards (4.5:1)".to_string());
        }

        if !lower.contains("viewport") && !lower.contains("responsive") {
            recommendations.push("Ensure responsive design for mobile accessibility".to_string());
        }

        recommendations
    }

    fn list_issues(&self, structure: &SemanticStructure) -> Vec<String> {
        let lists = &structure.lists;
        let mut issues = Vec::new();

        if lists.list_items > 0 && lists.ordered_lists + lists.unordered_lists == 0 {
            issues.push("List items found without parent <ul> or <ol> elements".to_string());
        }
        if lists.empty_lists > 0 {
            issues.push("Empty list elements found".to_string());
        }

        issues
    }

    fn form_issues(&self, structure: &SemanticStructure) -> Vec<String> {
        let forms = &structure.forms;
        let mut issues = Vec::new();

        if forms.inputs > 0 {
            if forms.labels == 0 {
                issues.push("Form inputs found without corresponding <label> elements".to_string());
            }
            if forms.inputs > self.weights.max_ungrouped_inputs && forms.fieldsets == 0 {
                issues.push("Complex forms should use <fieldset> and <legend> for grouping".to_string());
            }
        }
        if forms.forms_with_action < forms.forms {
            issues.push("Forms should have explicit action attributes".to_string());
        }

        issues
    }

    fn table_issues(&self, structure: &SemanticStructure) -> Vec<String> {
        let tables = &structure.tables;
        let mut issues = Vec::new();

        if tables.tables > 0 {
            if tables.captions == 0 {
                issues.push("Tables should have <caption> elements for accessibility".to_string());
            }
            if tables.headers == 0 {
                issues.push("Tables should use <th> elements for header cells".to_string());
            }
            if tables.headers > 0 && tables.headers_with_scope == 0 {
                issues.push("Table headers should have scope attributes (row/col)".to_string());
            }
        }

        issues
    }

    fn aria_issues(&self, structure: &SemanticStructure, length: usize) -> Vec<String> {
        let mut issues = Vec::new();

        if structure.buttons > structure.buttons_with_aria_label
            && structure.buttons > self.weights.max_unlabelled_buttons
        {
            issues.push("Consider adding aria-label attributes to buttons for better accessibility".to_string());
        }
        if !structure.has_main_signal() && length > self.weights.main_signal_min_length {
            issues.push("Large content should have main landmark (either <main> or role=\"main\")".to_string());
        }
        if structure.images > structure.images_with_alt {
            issues.push("All images should have alt attributes for accessibility".to_string());
        }

        issues
    }
}

/// Hierarchy problems in a sequence of heading levels
fn heading_hierarchy_issues(levels: &[u8]) -> Vec<String> {
    let Some(&first) = levels.first() else {
        return vec!["No headings found - consider adding headings for content structure".to_string()];
    };

    let mut issues = Vec::new();
    if first != 1 {
        issues.push("Page should start with an <h1> element".to_string());
    }

    for pair in levels.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        if current > previous + 1 {
            issues.push(format!("Heading level skipped: h{} followed by h{}", previous, current));
        }
    }

    let h1_count = levels.iter().filter(|&&level| level == 1).count();
    if h1_count > 1 {
        issues.push(format!(
            "Multiple h1 elements found ({}). Consider using only one h1 per page.",
            h1_count
        ));
    }

    issues
}
