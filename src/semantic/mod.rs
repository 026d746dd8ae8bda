/*!
 * Semantic HTML structure validation.
 *
 * - `structure`: one-pass structural profile of a document
 * - `validator`: rule set, scoring and recommendations
 */

pub mod structure;
pub mod validator;

pub use structure::SemanticStructure;
pub use validator::{SemanticValidationResult, SemanticValidator, SemanticWeights};
