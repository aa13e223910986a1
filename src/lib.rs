//! # headinganchor
//!
//! Heading ids and in-place anchors for markdown-it style token streams.
//!
//! Runs after a Markdown parser has produced its flat token list and before
//! the list is rendered to HTML. Every `heading_open` token followed by an
//! `inline` token gets a slug derived from the heading text: all whitespace
//! removed, the rest percent-encoded. The slug is set as the heading's `id`
//! and used as the `name` of an empty anchor inserted at the start of the
//! heading's inline content.
//!
//! ## Quick Start
//!
//! ```
//! use headinganchor::{HeadingAnchorOptions, add_heading_anchors, parse_tokens, render_html};
//!
//! let json = r#"[
//!     {"type": "heading_open", "tag": "h2", "nesting": 1, "block": true},
//!     {"type": "inline", "content": "Getting Started", "children": [
//!         {"type": "text", "content": "Getting Started"}
//!     ]},
//!     {"type": "heading_close", "tag": "h2", "nesting": -1, "block": true}
//! ]"#;
//!
//! let mut tokens = parse_tokens(json).unwrap();
//! add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
//!
//! assert_eq!(
//!     render_html(&tokens),
//!     "<h2 id=\"GettingStarted\"><a name=\"GettingStarted\" \
//!      class=\"markdown-it-headinganchor\" href=\"#\"></a>Getting Started</h2>\n"
//! );
//! ```
//!
//! ## Options
//!
//! [`HeadingAnchorOptions`] controls the anchor class and whether ids and
//! anchors are added at all. It deserializes from the same option object a
//! JavaScript host would pass, with missing keys defaulted.
//!
//! Slugs are not deduplicated: two headings with the same text get the same
//! id. Empty heading text produces an empty id.

pub mod anchor;
pub mod error;
pub mod options;
pub mod render;
pub mod rule;
pub mod slugify;
pub mod token;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use anchor::{AnchorReport, add_heading_anchors, anchor_html, anchor_token};
pub use error::{Error, Result};
pub use options::{DEFAULT_ANCHOR_CLASS, HeadingAnchorOptions};
pub use render::{render_html, render_inline_as_text};
pub use rule::{CoreRule, CoreRuler, HeadingAnchorRule};
pub use slugify::{is_space_separator, slugify, slugify_with};
pub use token::{Nesting, Token, TokenKind, count_tokens, parse_tokens, to_json, to_json_pretty};

/// Decode a JSON token array, add heading anchors, and encode it again.
///
/// This is the whole transform for hosts that exchange tokens as JSON.
pub fn process_json(tokens_json: &str, options: &HeadingAnchorOptions) -> Result<String> {
    let mut tokens = parse_tokens(tokens_json)?;
    add_heading_anchors(&mut tokens, options);
    to_json(&tokens)
}
