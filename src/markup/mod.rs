/*!
 * Markup handling: tokenizing, tag balance and pretty-printing.
 */

pub mod balance;
pub mod options;
pub mod printer;
pub mod token;

pub use balance::check_balance;
pub use options::FormattingOptions;
pub use printer::{PrettyPrinter, format_html, format_jsx, minify_html};
pub use token::{Token, TokenKind, Tokenizer, tokenize, tokenize_lenient};
