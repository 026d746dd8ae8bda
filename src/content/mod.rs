/*!
 * Prose validation against brand guidelines.
 *
 * - `guidelines`: vocabulary policy (forbidden terms, tone keywords, medical terms)
 * - `scoring`: penalties and thresholds
 * - `validator`: scoring and improvement suggestions
 * - `parser`: heading, paragraph and terminology extraction
 */

pub mod guidelines;
pub mod parser;
pub mod scoring;
pub mod validator;

pub use guidelines::{BrandGuidelines, KEY_MEDICAL_PHRASES, ToneKeywords};
pub use parser::ParsedContent;
pub use scoring::ScoringWeights;
pub use validator::{ContentValidator, ValidationResult};
