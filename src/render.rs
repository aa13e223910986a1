//! HTML output for a token stream.
//!
//! Follows the default markdown-it renderer closely enough that a
//! transformed stream serializes the way the host would serialize it:
//! attributes in insertion order, raw HTML passed through, text escaped,
//! and a newline after block-level tags unless an inline token follows.

use crate::token::{Nesting, Token, TokenKind};

/// Escape `&`, `<`, `>` and `"` for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a full document.
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    render_tokens_into(tokens, &mut out);
    out
}

/// Flatten inline tokens to unescaped plain text.
///
/// Markup tags are dropped, images contribute their own alt text, and
/// line breaks become `\n`. Used for image `alt` attributes.
pub fn render_inline_as_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    push_inline_text(tokens, &mut out);
    out
}

fn push_inline_text(tokens: &[Token], out: &mut String) {
    for token in tokens {
        match &token.kind {
            TokenKind::Text | TokenKind::HtmlInline | TokenKind::HtmlBlock => {
                out.push_str(content(token))
            }
            TokenKind::Other(name) if name == "image" => {
                if let Some(children) = &token.children {
                    push_inline_text(children, out);
                }
            }
            TokenKind::Other(name) if name == "softbreak" || name == "hardbreak" => {
                out.push('\n')
            }
            _ => {}
        }
    }
}

fn render_tokens_into(tokens: &[Token], out: &mut String) {
    for idx in 0..tokens.len() {
        render_one(tokens, idx, out);
    }
}

fn content(token: &Token) -> &str {
    token.content.as_deref().unwrap_or("")
}

fn render_one(tokens: &[Token], idx: usize, out: &mut String) {
    let token = &tokens[idx];
    match &token.kind {
        TokenKind::Text => out.push_str(&escape_html(content(token))),
        TokenKind::HtmlInline | TokenKind::HtmlBlock => out.push_str(content(token)),
        TokenKind::Inline => {
            if let Some(children) = &token.children {
                render_tokens_into(children, out);
            }
        }
        TokenKind::Other(name) => match name.as_str() {
            "softbreak" => out.push('\n'),
            "hardbreak" => out.push_str("<br>\n"),
            "code_inline" => {
                out.push_str("<code");
                push_attrs(token, out);
                out.push('>');
                out.push_str(&escape_html(content(token)));
                out.push_str("</code>");
            }
            "code_block" => {
                out.push_str("<pre");
                push_attrs(token, out);
                out.push_str("><code>");
                out.push_str(&escape_html(content(token)));
                out.push_str("</code></pre>\n");
            }
            "fence" => render_fence(token, out),
            "image" => {
                let mut image = token.clone();
                let alt = image.children.as_deref().map(render_inline_as_text);
                image.attr_set("alt", alt.unwrap_or_default());
                render_token(std::slice::from_ref(&image), 0, out);
            }
            _ => render_token(tokens, idx, out),
        },
        TokenKind::HeadingOpen | TokenKind::HeadingClose => render_token(tokens, idx, out),
    }
}

fn render_fence(token: &Token, out: &mut String) {
    let lang = token.info.split_whitespace().next().unwrap_or("");
    out.push_str("<pre><code");
    if !lang.is_empty() {
        out.push_str(" class=\"language-");
        out.push_str(&escape_html(lang));
        out.push('"');
    }
    push_attrs(token, out);
    out.push('>');
    out.push_str(&escape_html(content(token)));
    out.push_str("</code></pre>\n");
}

fn push_attrs(token: &Token, out: &mut String) {
    for (name, value) in &token.attrs {
        out.push(' ');
        out.push_str(&escape_html(name));
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
}

/// Generic open/close/self-closing tag.
fn render_token(tokens: &[Token], idx: usize, out: &mut String) {
    let token = &tokens[idx];
    if token.hidden {
        return;
    }

    // Tight lists hide paragraphs; restore the line break they would emit.
    if token.block && token.nesting != Nesting::Closing && idx > 0 && tokens[idx - 1].hidden {
        out.push('\n');
    }

    out.push_str(if token.nesting == Nesting::Closing {
        "</"
    } else {
        "<"
    });
    out.push_str(&token.tag);
    push_attrs(token, out);

    let mut need_lf = token.block;
    if token.block
        && token.nesting == Nesting::Opening
        && let Some(next) = tokens.get(idx + 1)
        && (next.kind == TokenKind::Inline
            || next.hidden
            || (next.nesting == Nesting::Closing && next.tag == token.tag))
    {
        need_lf = false;
    }

    out.push_str(if need_lf { ">\n" } else { ">" });
}
