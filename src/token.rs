//! Flat token stream produced by a markdown-it style parser.
//!
//! A document is a `Vec<Token>` of block-level tokens. Tokens of kind
//! [`TokenKind::Inline`] carry the inline tokens of their block in
//! [`Token::children`]. The JSON shape matches what `md.parse()` returns, so a
//! host can hand its token array over as-is and read it back after the
//! transform.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

/// Token type tag.
///
/// Only the kinds the heading walker and the renderer dispatch on get their
/// own variant; every other markdown-it type round-trips through
/// [`TokenKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    HeadingOpen,
    HeadingClose,
    Inline,
    HtmlInline,
    HtmlBlock,
    Text,
    Other(String),
}

impl TokenKind {
    /// The markdown-it type string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::Inline => "inline",
            TokenKind::HtmlInline => "html_inline",
            TokenKind::HtmlBlock => "html_block",
            TokenKind::Text => "text",
            TokenKind::Other(name) => name,
        }
    }
}

impl From<&str> for TokenKind {
    fn from(s: &str) -> Self {
        match s {
            "heading_open" => TokenKind::HeadingOpen,
            "heading_close" => TokenKind::HeadingClose,
            "inline" => TokenKind::Inline,
            "html_inline" => TokenKind::HtmlInline,
            "html_block" => TokenKind::HtmlBlock,
            "text" => TokenKind::Text,
            other => TokenKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TokenKind::from(s.as_str()))
    }
}

/// Tag nesting level: `1` opens, `0` is self-contained, `-1` closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nesting {
    Opening,
    #[default]
    SelfClosing,
    Closing,
}

impl Serialize for Nesting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let n: i8 = match self {
            Nesting::Opening => 1,
            Nesting::SelfClosing => 0,
            Nesting::Closing => -1,
        };
        serializer.serialize_i8(n)
    }
}

impl<'de> Deserialize<'de> for Nesting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            1 => Ok(Nesting::Opening),
            0 => Ok(Nesting::SelfClosing),
            -1 => Ok(Nesting::Closing),
            n => Err(serde::de::Error::custom(format!(
                "nesting must be -1, 0 or 1, got {n}"
            ))),
        }
    }
}

/// One unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default)]
    pub tag: String,
    /// Attributes in insertion order. Serialized as `null` when empty.
    #[serde(default, with = "attrs_json")]
    pub attrs: Vec<(String, String)>,
    /// Source line range `[begin, end)`, for block tokens.
    #[serde(default)]
    pub map: Option<(usize, usize)>,
    #[serde(default)]
    pub nesting: Nesting,
    #[serde(default)]
    pub level: u32,
    /// Only inline tokens carry children.
    #[serde(default)]
    pub children: Option<Vec<Token>>,
    /// Text content. `None` when the host never populated it, which is
    /// different from an empty string.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub markup: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl Token {
    /// Create a token with no attributes, content or children.
    pub fn new(kind: TokenKind, tag: impl Into<String>, nesting: Nesting) -> Self {
        Self {
            kind,
            tag: tag.into(),
            attrs: Vec::new(),
            map: None,
            nesting,
            level: 0,
            children: None,
            content: None,
            markup: String::new(),
            info: String::new(),
            meta: serde_json::Value::Null,
            block: false,
            hidden: false,
        }
    }

    /// Raw HTML emitted verbatim inside inline content.
    pub fn html_inline(content: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::HtmlInline, "", Nesting::SelfClosing);
        token.content = Some(content.into());
        token
    }

    /// Plain text, escaped on output.
    pub fn text(content: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Text, "", Nesting::SelfClosing);
        token.content = Some(content.into());
        token
    }

    /// Inline container holding the source text and its parsed children.
    pub fn inline(content: impl Into<String>, children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Inline, "", Nesting::SelfClosing);
        token.content = Some(content.into());
        token.children = Some(children);
        token
    }

    pub fn is_heading_open(&self) -> bool {
        self.kind == TokenKind::HeadingOpen
    }

    pub fn is_inline(&self) -> bool {
        self.kind == TokenKind::Inline
    }

    /// Index of the first attribute named `name`.
    pub fn attr_index(&self, name: &str) -> Option<usize> {
        self.attrs.iter().position(|(key, _)| key == name)
    }

    /// Value of the first attribute named `name`.
    pub fn attr_get(&self, name: &str) -> Option<&str> {
        self.attr_index(name).map(|i| self.attrs[i].1.as_str())
    }

    /// Append an attribute, even if one with the same name exists.
    pub fn attr_push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Overwrite the first attribute named `name`, or append it.
    pub fn attr_set(&mut self, name: &str, value: impl Into<String>) {
        match self.attr_index(name) {
            Some(i) => self.attrs[i].1 = value.into(),
            None => self.attrs.push((name.to_string(), value.into())),
        }
    }

    /// Insert `child` before any existing children.
    pub fn prepend_child(&mut self, child: Token) {
        self.children.get_or_insert_with(Vec::new).insert(0, child);
    }
}

/// Count tokens including all nested children.
pub fn count_tokens(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|t| 1 + t.children.as_deref().map_or(0, count_tokens))
        .sum()
}

/// Decode a JSON token array.
pub fn parse_tokens(json: &str) -> Result<Vec<Token>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a token array as compact JSON.
pub fn to_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string(tokens)?)
}

/// Encode a token array as indented JSON.
pub fn to_json_pretty(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

mod attrs_json {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        attrs: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if attrs.is_empty() {
            serializer.serialize_none()
        } else {
            attrs.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        Ok(Option::<Vec<(String, String)>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
