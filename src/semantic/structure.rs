/*!
 * Structural profile of an HTML document.
 *
 * The profile is built in one pass over the markup token stream. Only start
 * tags and their attributes are inspected, plus the tokens that directly
 * follow a list container to detect empty lists. `script`, `style` and
 * `textarea` bodies are opaque text, so markup quoted inside them is never
 * counted. Tokenization is lenient: an unterminated tag or comment becomes
 * plain text and the rest of the document is still profiled.
 */

use once_cell::sync::Lazy;

use crate::errors::TokenizeError;
use crate::markup::options::default_self_closing_tags;
use crate::markup::token::{Token, tokenize_lenient};

static VOID_ELEMENTS: Lazy<Vec<String>> = Lazy::new(default_self_closing_tags);

static RAW_TEXT_ELEMENTS: Lazy<Vec<String>> = Lazy::new(|| {
    ["script", "style", "textarea"]
        .iter()
        .map(|name| name.to_string())
        .collect()
});

/// List containers and items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStructure {
    pub ordered_lists: usize,
    pub unordered_lists: usize,
    pub definition_lists: usize,
    pub list_items: usize,
    /// `ol`/`ul` elements closed with nothing but whitespace inside
    pub empty_lists: usize,
}

/// Form elements and their labelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStructure {
    pub forms: usize,
    pub forms_with_action: usize,
    pub fieldsets: usize,
    pub legends: usize,
    pub labels: usize,
    pub inputs: usize,
}

/// Tables and their accessibility markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStructure {
    pub tables: usize,
    pub captions: usize,
    pub headers: usize,
    pub headers_with_scope: usize,
}

/// Landmarks, headings and element counts of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticStructure {
    pub has_main_landmark: bool,
    pub has_header_landmark: bool,
    pub has_nav_landmark: bool,
    pub has_footer_landmark: bool,
    /// An element carries `role="main"` or `aria-label="main"`
    pub has_aria_main: bool,
    /// Heading levels in document order
    pub heading_hierarchy: Vec<u8>,
    pub sections_count: usize,
    pub articles_count: usize,
    pub aside_count: usize,
    pub lists: ListStructure,
    pub forms: FormStructure,
    pub tables: TableStructure,
    pub buttons: usize,
    pub buttons_with_aria_label: usize,
    pub images: usize,
    pub images_with_alt: usize,
    /// A class, id or role names a header region
    pub header_hint: bool,
    /// A class, id or role names a navigation region or menu
    pub nav_hint: bool,
    /// A class, id or role names a footer region
    pub footer_hint: bool,
}

impl SemanticStructure {
    /// Profile `html`. Malformed fragments are read as text rather than rejected
    pub fn analyze(html: &str) -> Result<Self, TokenizeError> {
        let tokens = tokenize_lenient(html, &VOID_ELEMENTS, &RAW_TEXT_ELEMENTS);
        let mut structure = Self::default();

        for (idx, token) in tokens.iter().enumerate() {
            let name = match token {
                Token::OpeningTag { name, .. } | Token::SelfClosingTag { name, .. } => name.as_str(),
                _ => continue,
            };

            structure.record_hints(token);

            match name {
                "main" => structure.has_main_landmark = true,
                "header" => structure.has_header_landmark = true,
                "nav" => structure.has_nav_landmark = true,
                "footer" => structure.has_footer_landmark = true,
                "section" => structure.sections_count += 1,
                "article" => structure.articles_count += 1,
                "aside" => structure.aside_count += 1,
                "ol" | "ul" => {
                    if name == "ol" {
                        structure.lists.ordered_lists += 1;
                    } else {
                        structure.lists.unordered_lists += 1;
                    }
                    if is_empty_element(&tokens[idx + 1..], name) {
                        structure.lists.empty_lists += 1;
                    }
                }
                "dl" => structure.lists.definition_lists += 1,
                "li" => structure.lists.list_items += 1,
                "form" => {
                    structure.forms.forms += 1;
                    if token.has_attribute("action") {
                        structure.forms.forms_with_action += 1;
                    }
                }
                "fieldset" => structure.forms.fieldsets += 1,
                "legend" => structure.forms.legends += 1,
                "label" => structure.forms.labels += 1,
                "input" => structure.forms.inputs += 1,
                "table" => structure.tables.tables += 1,
                "caption" => structure.tables.captions += 1,
                "th" => {
                    structure.tables.headers += 1;
                    if token.has_attribute("scope") {
                        structure.tables.headers_with_scope += 1;
                    }
                }
                "button" => {
                    structure.buttons += 1;
                    if token.has_attribute("aria-label") {
                        structure.buttons_with_aria_label += 1;
                    }
                }
                "img" => {
                    structure.images += 1;
                    if token.has_attribute("alt") {
                        structure.images_with_alt += 1;
                    }
                }
                _ => {
                    if let Some(level) = heading_level(name) {
                        structure.heading_hierarchy.push(level);
                    }
                }
            }
        }

        Ok(structure)
    }

    /// Whether the document signals its main content by element or ARIA
    pub fn has_main_signal(&self) -> bool {
        self.has_main_landmark || self.has_aria_main
    }

    fn record_hints(&mut self, token: &Token<'_>) {
        for attribute in ["role", "aria-label"] {
            if token
                .attribute(attribute)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("main"))
            {
                self.has_aria_main = true;
            }
        }

        for attribute in ["class", "id", "role"] {
            let Some(value) = token.attribute(attribute) else {
                continue;
            };
            let value = value.to_ascii_lowercase();
            if value.contains("header") || value.contains("banner") {
                self.header_hint = true;
            }
            if value.contains("nav") || value.contains("menu") {
                self.nav_hint = true;
            }
            if value.contains("footer") || value.contains("contentinfo") {
                self.footer_hint = true;
            }
        }
    }
}

/// Level of an `h1`..`h6` tag name
fn heading_level(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b'h', level @ b'1'..=b'6'] => Some(level - b'0'),
        _ => None,
    }
}

/// Whether `rest` closes `name` with only whitespace text before it
fn is_empty_element(rest: &[Token<'_>], name: &str) -> bool {
    for token in rest {
        match token {
            Token::Text(text) if text.trim().is_empty() => continue,
            Token::ClosingTag { name: closing, .. } => return closing == name,
            _ => return false,
        }
    }
    false
}
