/*!
 * Brand guidelines: the vocabulary policy prose is scored against.
 *
 * All lists are matched as case-insensitive substrings, so multi-word
 * entries ("paradigm shift") and hyphenated ones ("game-changing") work
 * without tokenizing the content.
 */

use serde::{Deserialize, Serialize};

/// Medical phrases extracted as key phrases when no custom list is configured
pub const KEY_MEDICAL_PHRASES: &[&str] = &[
    "predictive monitoring",
    "early detection",
    "respiratory health",
    "asthma prevention",
    "biomarker analysis",
    "clinical validation",
    "medical device",
    "healthcare innovation",
    "patient outcomes",
];

/// Keyword lists for the four brand voice categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneKeywords {
    #[serde(default = "default_calm")]
    pub calm: Vec<String>,

    #[serde(default = "default_medical")]
    pub medical: Vec<String>,

    #[serde(default = "default_reassuring")]
    pub reassuring: Vec<String>,

    #[serde(default = "default_precise")]
    pub precise: Vec<String>,
}

impl ToneKeywords {
    /// All keywords across categories, in category order.
    ///
    /// A keyword listed under two categories is yielded twice and therefore
    /// counts twice towards tone compliance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.calm
            .iter()
            .chain(&self.medical)
            .chain(&self.reassuring)
            .chain(&self.precise)
            .map(String::as_str)
    }

    /// Keywords by category name
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("calm", &self.calm),
            ("medical", &self.medical),
            ("reassuring", &self.reassuring),
            ("precise", &self.precise),
        ]
    }
}

impl Default for ToneKeywords {
    fn default() -> Self {
        Self {
            calm: default_calm(),
            medical: default_medical(),
            reassuring: default_reassuring(),
            precise: default_precise(),
        }
    }
}

/// Vocabulary policy for brand-compliant prose.
///
/// Built once and shared by every validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandGuidelines {
    /// Adjectives describing the brand voice
    #[serde(default = "default_voice_attributes")]
    pub voice_attributes: Vec<String>,

    /// Preferred vocabulary
    #[serde(default = "default_approved_terms")]
    pub approved_terms: Vec<String>,

    /// Hype words that make content invalid
    #[serde(default = "default_forbidden_terms")]
    pub forbidden_terms: Vec<String>,

    /// Tone keywords by voice category
    #[serde(default)]
    pub tone_keywords: ToneKeywords,

    /// Medical vocabulary used for terminology scoring and extraction
    #[serde(default = "default_medical_terms")]
    pub medical_terms: Vec<String>,

    /// Phrases reported as key phrases by the parser
    #[serde(default = "default_key_phrases")]
    pub key_phrases: Vec<String>,
}

impl Default for BrandGuidelines {
    fn default() -> Self {
        Self {
            voice_attributes: default_voice_attributes(),
            approved_terms: default_approved_terms(),
            forbidden_terms: default_forbidden_terms(),
            tone_keywords: ToneKeywords::default(),
            medical_terms: default_medical_terms(),
            key_phrases: default_key_phrases(),
        }
    }
}

impl BrandGuidelines {
    /// Forbidden terms that also appear in the approved list
    pub fn conflicting_terms(&self) -> Vec<&str> {
        self.forbidden_terms
            .iter()
            .filter(|term| {
                self.approved_terms
                    .iter()
                    .any(|approved| approved.eq_ignore_ascii_case(term))
            })
            .map(String::as_str)
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn default_voice_attributes() -> Vec<String> {
    strings(&["calm", "medical", "reassuring", "precise"])
}

fn default_approved_terms() -> Vec<String> {
    strings(&[
        "predictive", "monitoring", "respiratory", "biomarker", "clinical",
        "prevention", "early detection", "healthcare", "medical-grade",
        "scientific", "evidence-based", "validated", "precision", "accuracy",
        "patient", "caregiver", "clinician", "health", "breathing", "asthma",
        "inflammation", "FeNO", "VOCs", "sensor", "wearable", "continuous",
    ])
}

fn default_forbidden_terms() -> Vec<String> {
    strings(&[
        "revolutionary", "game-changing", "disruptive", "cutting-edge",
        "amazing", "incredible", "awesome", "mind-blowing", "breakthrough",
        "world-class", "best-in-class", "paradigm shift", "synergy",
        "leverage", "scalable solution", "next-generation", "state-of-the-art",
    ])
}

fn default_calm() -> Vec<String> {
    strings(&[
        "peaceful", "steady", "stable", "consistent", "reliable",
        "gentle", "quiet", "smooth", "balanced", "controlled",
    ])
}

fn default_medical() -> Vec<String> {
    strings(&[
        "clinical", "diagnostic", "therapeutic", "medical", "healthcare",
        "treatment", "patient", "physician", "hospital", "evidence-based",
        "peer-reviewed", "validated", "approved", "certified",
    ])
}

fn default_reassuring() -> Vec<String> {
    strings(&[
        "confident", "trusted", "secure", "protected", "safe",
        "reliable", "dependable", "proven", "established", "supported",
    ])
}

fn default_precise() -> Vec<String> {
    strings(&[
        "accurate", "specific", "measured", "quantified", "exact",
        "detailed", "systematic", "methodical", "rigorous", "scientific",
    ])
}

fn default_medical_terms() -> Vec<String> {
    strings(&[
        "FeNO", "fractional exhaled nitric oxide", "VOCs", "volatile organic compounds",
        "biomarker", "inflammation", "respiratory", "asthma", "airway",
        "pulmonary", "breathing", "exhaled breath", "clinical trial",
        "FDA", "medical device", "diagnostic", "monitoring", "sensor",
    ])
}

fn default_key_phrases() -> Vec<String> {
    strings(KEY_MEDICAL_PHRASES)
}
