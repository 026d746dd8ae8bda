/*!
 * Markup tokenizer.
 *
 * A single linear scan splits markup into typed tokens. Every token borrows
 * its raw slice of the input, so concatenating the raw slices of a token
 * stream reproduces the input exactly.
 *
 * - `<!-- ... -->` and other `<!...>` / `<?...?>` declarations are comments,
 *   except `<!DOCTYPE ...>`
 * - `</name ...>` is a closing tag
 * - a tag ending in `/>` or naming a void element is self-closing
 * - any other `<name ...>` is an opening tag
 * - everything else is text
 *
 * The body of a raw-text element (`pre`, `script`, ...) is returned as one
 * text token running up to its matching closing tag.
 */

use crate::errors::TokenizeError;

/// Kind of a markup token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpeningTag,
    ClosingTag,
    SelfClosingTag,
    Text,
    Comment,
    Doctype,
}

/// A markup token carrying its raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name ...>`
    OpeningTag { name: String, raw: &'a str },
    /// `</name>`
    ClosingTag { name: String, raw: &'a str },
    /// `<name ... />` or a void element
    SelfClosingTag { name: String, raw: &'a str },
    /// Character data between tags
    Text(&'a str),
    /// `<!-- ... -->` and other declarations
    Comment(&'a str),
    /// `<!DOCTYPE ...>`
    Doctype(&'a str),
}

impl<'a> Token<'a> {
    /// Kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpeningTag { .. } => TokenKind::OpeningTag,
            Token::ClosingTag { .. } => TokenKind::ClosingTag,
            Token::SelfClosingTag { .. } => TokenKind::SelfClosingTag,
            Token::Text(_) => TokenKind::Text,
            Token::Comment(_) => TokenKind::Comment,
            Token::Doctype(_) => TokenKind::Doctype,
        }
    }

    /// Raw source text of this token
    pub fn raw(&self) -> &'a str {
        match self {
            Token::OpeningTag { raw, .. }
            | Token::ClosingTag { raw, .. }
            | Token::SelfClosingTag { raw, .. } => *raw,
            Token::Text(raw) | Token::Comment(raw) | Token::Doctype(raw) => *raw,
        }
    }

    /// Lowercased element name for tag tokens
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::OpeningTag { name, .. }
            | Token::ClosingTag { name, .. }
            | Token::SelfClosingTag { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether this token is an opening or self-closing tag named `name`
    pub fn is_start_of(&self, name: &str) -> bool {
        matches!(
            self,
            Token::OpeningTag { name: n, .. } | Token::SelfClosingTag { name: n, .. } if n == name
        )
    }

    /// Attributes of an opening or self-closing tag
    pub fn attributes(&self) -> Attributes<'a> {
        match self {
            Token::OpeningTag { raw, .. } | Token::SelfClosingTag { raw, .. } => {
                Attributes::new(*raw)
            }
            _ => Attributes::new(""),
        }
    }

    /// Value of the attribute `name`; `Some("")` for a bare attribute
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.unwrap_or(""))
    }

    /// Whether the tag carries the attribute `name`
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Streaming tokenizer over a markup string
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    void_elements: &'a [String],
    raw_text_elements: &'a [String],
    strict: bool,
    jsx: bool,
    pending_raw: Option<String>,
}

impl<'a> Tokenizer<'a> {
    /// Create a lenient tokenizer; `void_elements` are classified as self-closing
    pub fn new(input: &'a str, void_elements: &'a [String]) -> Self {
        Self {
            input,
            pos: 0,
            void_elements,
            raw_text_elements: &[],
            strict: false,
            jsx: false,
            pending_raw: None,
        }
    }

    /// Report unterminated tags and comments as errors instead of text
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Allow `{...}` expressions containing `>` inside tags
    pub fn jsx(mut self) -> Self {
        self.jsx = true;
        self
    }

    /// Elements whose body is returned verbatim as a single text token
    pub fn with_raw_text_elements(mut self, elements: &'a [String]) -> Self {
        self.raw_text_elements = elements;
        self
    }

    /// Produce the next token, `None` at end of input
    pub fn next_token(&mut self) -> Option<Result<Token<'a>, TokenizeError>> {
        if self.pos >= self.input.len() {
            return None;
        }

        if let Some(name) = self.pending_raw.take() {
            let rest = &self.input[self.pos..];
            let end = find_raw_close(rest, &name).unwrap_or(rest.len());
            if end > 0 {
                let start = self.pos;
                self.pos += end;
                return Some(Ok(Token::Text(&self.input[start..self.pos])));
            }
        }

        let bytes = self.input.as_bytes();
        if starts_markup(bytes, self.pos) {
            return Some(self.scan_markup());
        }

        Some(Ok(self.scan_text()))
    }

    fn scan_text(&mut self) -> Token<'a> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start + 1;
        while end < bytes.len() && !starts_markup(bytes, end) {
            end += 1;
        }
        // `end` only ever stops on an ASCII `<` or at the end of input
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    fn scan_markup(&mut self) -> Result<Token<'a>, TokenizeError> {
        let start = self.pos;
        let rest = &self.input[start..];

        if rest.starts_with("<!--") {
            return match rest[4..].find("-->") {
                Some(idx) => {
                    let end = start + 4 + idx + 3;
                    self.pos = end;
                    Ok(Token::Comment(&self.input[start..end]))
                }
                None => self.unterminated(TokenizeError::UnterminatedComment { offset: start }),
            };
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            return match rest.find('>') {
                Some(idx) => {
                    let end = start + idx + 1;
                    self.pos = end;
                    let raw = &self.input[start..end];
                    if is_doctype(raw) {
                        Ok(Token::Doctype(raw))
                    } else {
                        Ok(Token::Comment(raw))
                    }
                }
                None => self.unterminated(TokenizeError::UnterminatedTag { offset: start }),
            };
        }

        let Some(end) = self.find_tag_end(start) else {
            return self.unterminated(TokenizeError::UnterminatedTag { offset: start });
        };
        self.pos = end;
        let raw = &self.input[start..end];

        if raw.starts_with("</") {
            return Ok(Token::ClosingTag {
                name: tag_name(&raw[2..]),
                raw,
            });
        }

        let name = tag_name(&raw[1..]);
        if raw.ends_with("/>") || contains_tag(self.void_elements, &name) {
            return Ok(Token::SelfClosingTag { name, raw });
        }

        if contains_tag(self.raw_text_elements, &name) {
            self.pending_raw = Some(name.clone());
        }
        Ok(Token::OpeningTag { name, raw })
    }

    /// Handle markup that never closes: an error in strict mode, trailing text otherwise
    fn unterminated(&mut self, error: TokenizeError) -> Result<Token<'a>, TokenizeError> {
        let start = self.pos;
        self.pos = self.input.len();
        if self.strict {
            Err(error)
        } else {
            Ok(Token::Text(&self.input[start..]))
        }
    }

    /// Byte index just past the `>` closing the tag at `start`
    fn find_tag_end(&self, start: usize) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut quote: Option<u8> = None;
        let mut braces = 0usize;
        let mut last_significant = b'<';

        for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
            if let Some(q) = quote {
                if b == q {
                    quote = None;
                    last_significant = b;
                }
                continue;
            }
            match b {
                b'"' | b'\'' if last_significant == b'=' => quote = Some(b),
                b'{' if self.jsx => braces += 1,
                b'}' if self.jsx => braces = braces.saturating_sub(1),
                b'>' if braces == 0 => return Some(i + 1),
                _ => {}
            }
            if !b.is_ascii_whitespace() {
                last_significant = b;
            }
        }
        None
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if matches!(token, Some(Err(_))) {
            self.pos = self.input.len();
        }
        token
    }
}

/// Tokenize `input` in strict mode
pub fn tokenize<'a>(
    input: &'a str,
    void_elements: &'a [String],
    raw_text_elements: &'a [String],
) -> Result<Vec<Token<'a>>, TokenizeError> {
    Tokenizer::new(input, void_elements)
        .with_raw_text_elements(raw_text_elements)
        .strict()
        .collect()
}

/// Tokenize `input` in lenient mode, where unterminated markup becomes text
pub fn tokenize_lenient<'a>(
    input: &'a str,
    void_elements: &'a [String],
    raw_text_elements: &'a [String],
) -> Vec<Token<'a>> {
    Tokenizer::new(input, void_elements)
        .with_raw_text_elements(raw_text_elements)
        .filter_map(Result::ok)
        .collect()
}

/// Iterator over `(name, value)` pairs of a raw tag
pub struct Attributes<'a> {
    raw: &'a str,
    pos: usize,
}

impl<'a> Attributes<'a> {
    fn new(raw: &'a str) -> Self {
        let bytes = raw.as_bytes();
        // Skip `<` and the element name
        let mut pos = usize::from(!bytes.is_empty());
        while pos < bytes.len() && is_name_byte(bytes[pos]) {
            pos += 1;
        }
        Self { raw, pos }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.raw.as_bytes();
        let len = bytes.len();

        while self.pos < len && (bytes[self.pos].is_ascii_whitespace() || bytes[self.pos] == b'/') {
            self.pos += 1;
        }
        if self.pos >= len || bytes[self.pos] == b'>' {
            return None;
        }

        let name_start = self.pos;
        while self.pos < len
            && !bytes[self.pos].is_ascii_whitespace()
            && !matches!(bytes[self.pos], b'=' | b'>' | b'/')
        {
            self.pos += 1;
        }
        let name = &self.raw[name_start..self.pos];

        let mut cursor = self.pos;
        while cursor < len && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor >= len || bytes[cursor] != b'=' {
            return Some((name, None));
        }

        cursor += 1;
        while cursor < len && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }

        let value = match bytes.get(cursor) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let value_start = cursor + 1;
                let value_end = self.raw[value_start..]
                    .find(q as char)
                    .map_or(len, |idx| value_start + idx);
                self.pos = (value_end + 1).min(len);
                &self.raw[value_start..value_end]
            }
            _ => {
                let value_start = cursor;
                let mut value_end = cursor;
                while value_end < len
                    && !bytes[value_end].is_ascii_whitespace()
                    && bytes[value_end] != b'>'
                {
                    value_end += 1;
                }
                self.pos = value_end;
                &self.raw[value_start..value_end]
            }
        };

        Some((name, Some(value)))
    }
}

/// Whether a `<` at `idx` begins markup rather than literal text
fn starts_markup(bytes: &[u8], idx: usize) -> bool {
    if bytes.get(idx) != Some(&b'<') {
        return false;
    }
    match bytes.get(idx + 1) {
        Some(b) if b.is_ascii_alphabetic() => true,
        Some(b'!') | Some(b'?') => true,
        Some(b'/') => bytes.get(idx + 2).is_some_and(u8::is_ascii_alphabetic),
        _ => false,
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b':' | b'_' | b'.')
}

/// Lowercased element name at the start of `s`
fn tag_name(s: &str) -> String {
    s.bytes()
        .take_while(|&b| is_name_byte(b))
        .map(|b| b.to_ascii_lowercase() as char)
        .collect()
}

fn is_doctype(raw: &str) -> bool {
    raw.get(2..9)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("doctype"))
}

fn contains_tag(list: &[String], name: &str) -> bool {
    list.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Byte offset of the `</name` that closes a raw-text element
fn find_raw_close(rest: &str, name: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    rest.match_indices("</").map(|(idx, _)| idx).find(|&idx| {
        let name_start = idx + 2;
        let name_end = name_start + name.len();
        name_end <= bytes.len()
            && bytes[name_start..name_end].eq_ignore_ascii_case(name.as_bytes())
            && bytes
                .get(name_end)
                .is_none_or(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace())
    })
}
