/*!
 * Formatting options for the markup pretty printer.
 *
 * The tag lists drive both tokenization (void and whitespace-preserving
 * elements) and layout (block and inline elements). Elements in neither
 * layout list, such as custom elements, are laid out as blocks unless void.
 */

use serde::{Deserialize, Serialize};

/// Configuration for markup formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingOptions {
    /// Number of indent characters per nesting level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Character used for indentation
    #[serde(default = "default_indent_char")]
    pub indent_char: char,

    /// Lines are wrapped before reaching this width
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Elements whose content passes through byte-for-byte
    #[serde(default = "default_preserve_whitespace")]
    pub preserve_whitespace: Vec<String>,

    /// Void elements that never take a closing tag
    #[serde(default = "default_self_closing_tags")]
    pub self_closing_tags: Vec<String>,

    /// Elements placed on their own line with their own indentation level
    #[serde(default = "default_block_elements")]
    pub block_elements: Vec<String>,

    /// Elements that may share a line with surrounding content. Unlisted
    /// non-void elements start their own line
    #[serde(default = "default_inline_elements")]
    pub inline_elements: Vec<String>,
}

fn default_indent_size() -> usize {
    2
}

fn default_indent_char() -> char {
    ' '
}

fn default_max_line_length() -> usize {
    120
}

fn tag_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Elements whose content is never reformatted
pub fn default_preserve_whitespace() -> Vec<String> {
    tag_list(&["pre", "code", "textarea", "script", "style"])
}

/// HTML void elements
pub fn default_self_closing_tags() -> Vec<String> {
    tag_list(&[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ])
}

fn default_block_elements() -> Vec<String> {
    tag_list(&[
        "html", "head", "body", "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "section",
        "article", "header", "footer", "nav", "main", "aside", "ul", "ol", "li", "dl", "dt",
        "dd", "table", "caption", "thead", "tbody", "tfoot", "tr", "td", "th", "form",
        "fieldset", "legend", "blockquote", "pre", "address", "figure", "figcaption",
    ])
}

fn default_inline_elements() -> Vec<String> {
    tag_list(&[
        "a", "span", "strong", "em", "b", "i", "u", "small", "sub", "sup", "code", "kbd",
        "samp", "var", "time", "mark", "del", "ins", "q", "cite", "abbr", "dfn", "data",
        "button", "label", "s", "bdi", "bdo", "output",
    ])
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            indent_char: default_indent_char(),
            max_line_length: default_max_line_length(),
            preserve_whitespace: default_preserve_whitespace(),
            self_closing_tags: default_self_closing_tags(),
            block_elements: default_block_elements(),
            inline_elements: default_inline_elements(),
        }
    }
}

impl FormattingOptions {
    /// Whether `name` starts its own line and indentation level
    pub fn is_block(&self, name: &str) -> bool {
        contains_tag(&self.block_elements, name)
    }

    /// Whether `name` owns its lines in the layout: listed blocks, plus any
    /// element that is neither inline nor void
    pub fn starts_line(&self, name: &str) -> bool {
        self.is_block(name) || !(self.is_inline(name) || self.is_void(name))
    }

    /// Whether `name` is listed as an inline element
    pub fn is_inline(&self, name: &str) -> bool {
        contains_tag(&self.inline_elements, name)
    }

    /// Whether `name` is a void element
    pub fn is_void(&self, name: &str) -> bool {
        contains_tag(&self.self_closing_tags, name)
    }

    /// Whether the content of `name` must be left untouched
    pub fn preserves_whitespace(&self, name: &str) -> bool {
        contains_tag(&self.preserve_whitespace, name)
    }

    /// Indentation prefix for the given nesting depth
    pub fn indent(&self, depth: usize) -> String {
        std::iter::repeat_n(self.indent_char, depth * self.indent_size).collect()
    }
}

fn contains_tag(list: &[String], name: &str) -> bool {
    list.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}
