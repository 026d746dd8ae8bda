/*!
 * Tag balance checking.
 *
 * Replays a token stream with a stack of open element names. Void and
 * self-closing elements are never pushed.
 */

use crate::errors::MarkupError;

use super::token::Token;

/// Check that every opening tag in `tokens` is closed in order
pub fn check_balance(tokens: &[Token<'_>]) -> Result<(), MarkupError> {
    let mut open: Vec<&str> = Vec::new();

    for token in tokens {
        match token {
            Token::OpeningTag { name, .. } => open.push(name.as_str()),
            Token::ClosingTag { name, .. } => match open.pop() {
                Some(expected) if expected == name.as_str() => {}
                Some(expected) => {
                    return Err(MarkupError::Mismatched {
                        expected: expected.to_string(),
                        found: name.clone(),
                    });
                }
                None => {
                    return Err(MarkupError::UnexpectedClose {
                        found: name.clone(),
                    });
                }
            },
            _ => {}
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(MarkupError::Unclosed {
            tags: open.into_iter().map(str::to_string).collect(),
        })
    }
}
