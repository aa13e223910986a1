//! Heading id and anchor injection over a flat token stream.
//!
//! A heading unit is a `heading_open` token directly followed by an `inline`
//! token. For each unit the inline content is slugified, the slug is set as
//! the heading's `id`, and an empty `<a name="slug">` is prepended to the
//! inline children. Anything else in the stream is left untouched.

use log::{debug, trace};

use crate::options::HeadingAnchorOptions;
use crate::render::escape_html;
use crate::slugify::slugify;
use crate::token::{Token, TokenKind};

/// What a single pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorReport {
    /// Heading units that received a slug.
    pub headings: usize,
    /// `id` attributes written.
    pub ids: usize,
    /// Anchor tokens inserted.
    pub anchors: usize,
    /// Heading units passed over because the inline token had no content.
    pub skipped: usize,
}

/// Decorate every heading unit in `tokens` according to `options`.
///
/// Runs in one left-to-right pass. Top-level tokens are never added, removed
/// or reordered; only heading attributes and inline children change.
pub fn add_heading_anchors(tokens: &mut [Token], options: &HeadingAnchorOptions) -> AnchorReport {
    let mut report = AnchorReport::default();
    let mut i = 0;

    while i + 1 < tokens.len() {
        match (&tokens[i].kind, &tokens[i + 1].kind) {
            (TokenKind::HeadingOpen, TokenKind::Inline) => {}
            _ => {
                i += 1;
                continue;
            }
        }

        let (head, tail) = tokens.split_at_mut(i + 1);
        let open = &mut head[i];
        let inline = &mut tail[0];

        let Some(text) = inline.content.as_deref() else {
            debug!("heading at token {i} has no inline content, skipping");
            report.skipped += 1;
            i += 2;
            continue;
        };

        let slug = slugify(text);
        trace!("heading at token {i}: {text:?} -> {slug:?}");
        report.headings += 1;

        if options.add_heading_id {
            open.attr_set("id", slug.as_str());
            report.ids += 1;
        }

        if options.add_heading_anchor {
            inline.prepend_child(anchor_token(&slug, &options.anchor_class));
            report.anchors += 1;
        }

        i += 2;
    }

    debug!(
        "heading anchors: {} processed, {} skipped",
        report.headings, report.skipped
    );
    report
}

/// Markup of the anchor placed inside a heading.
///
/// The slug is already percent-encoded; the class is attribute-escaped.
pub fn anchor_html(slug: &str, anchor_class: &str) -> String {
    format!(
        "<a name=\"{}\" class=\"{}\" href=\"#\"></a>",
        slug,
        escape_html(anchor_class)
    )
}

/// Raw HTML inline token carrying [`anchor_html`].
pub fn anchor_token(slug: &str, anchor_class: &str) -> Token {
    Token::html_inline(anchor_html(slug, anchor_class))
}
