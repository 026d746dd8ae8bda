/*!
 * Markup pretty printer.
 *
 * Formatting runs in three passes over a single token stream:
 * - tokenize the input (whitespace-preserving element bodies come back as
 *   one verbatim text token)
 * - lay the tokens out: block elements own a line and an indentation level,
 *   inline and void elements and text are appended to the current line while
 *   it stays under the configured width and wrapped otherwise. Elements on
 *   neither layout list are treated as blocks
 * - replay the tokenizer over the output and check tag balance
 *
 * Layout is a pure function of the normalized token stream, and the
 * whitespace it introduces normalizes away again, so formatting is
 * idempotent.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MarkupError, TokenizeError};

use super::balance::check_balance;
use super::options::FormattingOptions;
use super::token::{Token, Tokenizer, tokenize_lenient};

/// Runs of whitespace
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Whitespace around `=` ahead of an attribute value
static ATTRIBUTE_EQUALS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s*=\s*(["'{])"#).expect("Invalid attribute regex"));

/// Whitespace before the `>` ending a tag
static TAG_END_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+>$").expect("Invalid tag end regex"));

/// Whitespace before `>` or `/>` when minifying
static MINIFY_TAG_END_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(/?>)$").expect("Invalid minify tag end regex"));

/// JSX class attribute
static CLASS_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclassName=").expect("Invalid className regex"));

/// Pretty printer for HTML and JSX-like markup
#[derive(Debug, Clone, Default)]
pub struct PrettyPrinter {
    options: FormattingOptions,
}

impl PrettyPrinter {
    /// Create a printer with default formatting options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a printer with custom formatting options
    pub fn with_options(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Formatting options in use
    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// Format markup with consistent indentation.
    ///
    /// Fails with a [`MarkupError`] when the markup cannot be tokenized or
    /// its tags do not balance.
    pub fn format_html(&self, markup: &str) -> Result<String, MarkupError> {
        let tokens = self.tokenize(markup, false)?;
        let formatted = self.layout(&tokens, false);
        self.validate(&formatted)?;

        debug!(
            "Formatted markup: {} tokens, {} bytes in, {} bytes out",
            tokens.len(),
            markup.len(),
            formatted.len()
        );

        Ok(formatted)
    }

    /// Format JSX markup.
    ///
    /// `{...}` expressions may contain `>` inside tags and `className=` is
    /// written as `class=`. Tag balance is not enforced, since components
    /// are routinely formatted as fragments. Failures carry the
    /// `JSX formatter error:` prefix.
    pub fn format_jsx(&self, jsx: &str) -> Result<String, MarkupError> {
        let tokens = self.tokenize(jsx, true).map_err(MarkupError::Jsx)?;
        Ok(self.layout(&tokens, true))
    }

    /// Collapse redundant whitespace.
    ///
    /// Whitespace between tags is removed and other runs are collapsed to a
    /// single space. Bodies of whitespace-preserving elements are kept.
    /// Unterminated markup is treated as text rather than rejected.
    pub fn minify_html(&self, markup: &str) -> String {
        let tokens = tokenize_lenient(
            markup,
            &self.options.self_closing_tags,
            &self.options.preserve_whitespace,
        );

        let mut output = String::with_capacity(markup.len());
        let mut verbatim_next = false;

        for token in &tokens {
            let verbatim = std::mem::take(&mut verbatim_next);
            match token {
                Token::Text(text) if verbatim => output.push_str(text),
                Token::Text(text) => {
                    if !text.trim().is_empty() {
                        output.push_str(&WHITESPACE_REGEX.replace_all(text, " "));
                    }
                }
                Token::OpeningTag { name, raw } => {
                    output.push_str(&minify_tag(raw));
                    verbatim_next = self.options.preserves_whitespace(name);
                }
                Token::ClosingTag { raw, .. } | Token::SelfClosingTag { raw, .. } => {
                    output.push_str(&minify_tag(raw));
                }
                Token::Comment(raw) | Token::Doctype(raw) => {
                    output.push_str(&WHITESPACE_REGEX.replace_all(raw, " "));
                }
            }
        }

        output.trim().to_string()
    }

    /// Whether markup balances; a document declaring a doctype must also be
    /// an HTML5 document with `html`, `head` and `body` elements.
    pub fn is_valid_html5(&self, markup: &str) -> bool {
        let Ok(tokens) = self.tokenize(markup, false) else {
            return false;
        };
        if check_balance(&tokens).is_err() {
            return false;
        }

        let doctype = tokens.iter().find_map(|token| match token {
            Token::Doctype(raw) => Some(*raw),
            _ => None,
        });

        match doctype {
            None => true,
            Some(raw) => {
                is_html5_doctype(raw)
                    && ["html", "head", "body"]
                        .iter()
                        .all(|element| tokens.iter().any(|token| token.is_start_of(element)))
            }
        }
    }

    /// Normalize whitespace inside a single tag
    pub fn format_attributes(&self, tag: &str) -> String {
        let collapsed = WHITESPACE_REGEX.replace_all(tag.trim(), " ");
        let joined = ATTRIBUTE_EQUALS_REGEX.replace_all(&collapsed, "=$1");
        TAG_END_REGEX.replace(&joined, ">").into_owned()
    }

    fn tokenize<'a>(&'a self, markup: &'a str, jsx: bool) -> Result<Vec<Token<'a>>, TokenizeError> {
        let mut tokenizer = Tokenizer::new(markup, &self.options.self_closing_tags)
            .with_raw_text_elements(&self.options.preserve_whitespace)
            .strict();
        if jsx {
            tokenizer = tokenizer.jsx();
        }
        tokenizer.collect()
    }

    /// Replay the tokenizer over `markup` and check tag balance
    fn validate(&self, markup: &str) -> Result<(), MarkupError> {
        let tokens = self.tokenize(markup, false)?;
        check_balance(&tokens)
    }

    fn render_tag(&self, raw: &str, jsx: bool) -> String {
        let tag = self.format_attributes(raw);
        if jsx {
            CLASS_NAME_REGEX.replace_all(&tag, "class=").into_owned()
        } else {
            tag
        }
    }

    fn layout(&self, tokens: &[Token<'_>], jsx: bool) -> String {
        let options = &self.options;
        let mut writer = LineWriter::new(options);
        let mut depth = 0usize;
        let mut preserved: Option<&str> = None;

        for token in tokens {
            if let Some(open) = preserved {
                match token {
                    Token::ClosingTag { name, raw } if name == open => {
                        writer.append_verbatim(&self.render_tag(raw, jsx));
                        preserved = None;
                        if options.starts_line(name) {
                            depth = depth.saturating_sub(1);
                            writer.seal();
                        }
                    }
                    other => writer.append_verbatim(other.raw()),
                }
                continue;
            }

            match token {
                Token::Doctype(raw) => writer.push_block(0, raw),
                Token::Comment(raw) => writer.push_block(depth, raw),
                Token::OpeningTag { name, raw } => {
                    let tag = self.render_tag(raw, jsx);
                    if options.starts_line(name) {
                        writer.push_block(depth, &tag);
                        depth += 1;
                    } else {
                        writer.push_inline(depth, &tag);
                    }
                    if options.preserves_whitespace(name) {
                        preserved = Some(name);
                    }
                }
                Token::SelfClosingTag { name, raw } => {
                    let tag = self.render_tag(raw, jsx);
                    if options.starts_line(name) {
                        writer.push_block(depth, &tag);
                    } else {
                        writer.push_inline(depth, &tag);
                    }
                }
                Token::ClosingTag { name, raw } => {
                    let tag = self.render_tag(raw, jsx);
                    if options.starts_line(name) {
                        depth = depth.saturating_sub(1);
                        writer.push_block(depth, &tag);
                    } else {
                        writer.push_inline(depth, &tag);
                    }
                }
                Token::Text(text) => writer.push_text(depth, text),
            }
        }

        writer.finish()
    }
}

/// Accumulates formatted output line by line.
///
/// The width of the current line is tracked incrementally so appending never
/// rescans earlier output.
struct LineWriter<'o> {
    options: &'o FormattingOptions,
    output: String,
    has_line: bool,
    width: usize,
    /// Whether the current line accepts inline content
    open: bool,
    /// Whether a separating space is owed before the next inline item
    pending_space: bool,
}

impl<'o> LineWriter<'o> {
    fn new(options: &'o FormattingOptions) -> Self {
        Self {
            options,
            output: String::new(),
            has_line: false,
            width: 0,
            open: false,
            pending_space: false,
        }
    }

    fn start_line(&mut self, depth: usize, content: &str) {
        if self.has_line {
            self.output.push('\n');
        }
        self.has_line = true;

        let indent = self.options.indent(depth);
        self.output.push_str(&indent);
        self.output.push_str(content);
        self.width = advance_width(indent.chars().count(), content);
    }

    /// Place `content` on a line of its own
    fn push_block(&mut self, depth: usize, content: &str) {
        self.start_line(depth, content);
        self.open = false;
        self.pending_space = false;
    }

    /// Append `content` to the current line if it fits, else wrap
    fn push_inline(&mut self, depth: usize, content: &str) {
        let separator = usize::from(self.pending_space);
        let width = content.chars().count();

        if self.open && self.width + separator + width < self.options.max_line_length {
            if self.pending_space {
                self.output.push(' ');
            }
            self.output.push_str(content);
            self.width += separator + width;
        } else {
            self.start_line(depth, content);
            self.open = true;
        }
        self.pending_space = false;
    }

    /// Append collapsed text word by word; whitespace-only text is dropped
    fn push_text(&mut self, depth: usize, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                self.pending_space = true;
            }
            self.push_inline(depth, word);
        }
        if text.ends_with(char::is_whitespace) {
            self.pending_space = true;
        }
    }

    /// Append `content` unchanged to the current line
    fn append_verbatim(&mut self, content: &str) {
        self.has_line = true;
        self.output.push_str(content);
        self.width = advance_width(self.width, content);
        self.pending_space = false;
    }

    /// Stop further inline content from joining the current line
    fn seal(&mut self) {
        self.open = false;
        self.pending_space = false;
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Width of the current line after appending `content` to a line `width` wide
fn advance_width(width: usize, content: &str) -> usize {
    match content.rfind('\n') {
        Some(idx) => content[idx + 1..].chars().count(),
        None => width + content.chars().count(),
    }
}

fn minify_tag(raw: &str) -> String {
    let collapsed = WHITESPACE_REGEX.replace_all(raw, " ");
    MINIFY_TAG_END_REGEX.replace(&collapsed, "$1").into_owned()
}

fn is_html5_doctype(raw: &str) -> bool {
    raw.trim_start_matches("<!")
        .trim_end_matches('>')
        .split_whitespace()
        .nth(1)
        .is_some_and(|word| word.eq_ignore_ascii_case("html"))
}

/// Format `markup` with `options`, or the defaults
pub fn format_html(markup: &str, options: Option<&FormattingOptions>) -> Result<String, MarkupError> {
    let printer = PrettyPrinter::with_options(options.cloned().unwrap_or_default());
    printer.format_html(markup)
}

/// Format JSX `markup` with `options`, or the defaults
pub fn format_jsx(markup: &str, options: Option<&FormattingOptions>) -> Result<String, MarkupError> {
    let printer = PrettyPrinter::with_options(options.cloned().unwrap_or_default());
    printer.format_jsx(markup)
}

/// Minify `markup` with the default options
pub fn minify_html(markup: &str) -> String {
    PrettyPrinter::new().minify_html(markup)
}
