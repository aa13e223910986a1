//! End-to-end heading anchor tests over a markdown-it token dump.

use headinganchor::{
    CoreRuler, HeadingAnchorOptions, Token, TokenKind, add_heading_anchors, count_tokens,
    parse_tokens, process_json, render_html,
};

const DOCUMENT: &str = include_str!("fixtures/document.json");

fn load() -> Vec<Token> {
    parse_tokens(DOCUMENT).expect("fixture should parse")
}

fn heading_ids(tokens: &[Token]) -> Vec<Option<&str>> {
    tokens
        .iter()
        .filter(|t| t.is_heading_open())
        .map(|t| t.attr_get("id"))
        .collect()
}

#[test]
fn test_fixture_shape() {
    let tokens = load();
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens.iter().filter(|t| t.is_heading_open()).count(), 4);
}

#[test]
fn test_default_options_render() {
    let mut tokens = load();
    let report = add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    assert_eq!(report.headings, 4);
    assert_eq!(report.anchors, 4);

    let expected = concat!(
        "<h1 id=\"HelloWorld\"><a name=\"HelloWorld\" class=\"markdown-it-headinganchor\" href=\"#\"></a>Hello World</h1>\n",
        "<p>Some <em>text</em> here.</p>\n",
        "<h2 id=\"C%2B%2B%26Friends\"><a name=\"C%2B%2B%26Friends\" class=\"markdown-it-headinganchor\" href=\"#\"></a>C++ &amp; Friends</h2>\n",
        "<h3 id=\"%60code%60in**heading**\"><a name=\"%60code%60in**heading**\" class=\"markdown-it-headinganchor\" href=\"#\"></a><code>code</code> in <strong>heading</strong></h3>\n",
        "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>\n",
        "<h2 id=\"HelloWorld\"><a name=\"HelloWorld\" class=\"markdown-it-headinganchor\" href=\"#\"></a>Hello World</h2>\n",
    );
    assert_eq!(render_html(&tokens), expected);
}

#[test]
fn test_slug_uses_raw_inline_source() {
    // Markup characters in the heading source are part of the slug.
    let mut tokens = load();
    add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    assert_eq!(tokens[9].attr_get("id"), Some("%60code%60in**heading**"));
}

#[test]
fn test_duplicate_headings_are_not_deduplicated() {
    let mut tokens = load();
    add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    assert_eq!(
        heading_ids(&tokens),
        [
            Some("HelloWorld"),
            Some("C%2B%2B%26Friends"),
            Some("%60code%60in**heading**"),
            Some("HelloWorld"),
        ]
    );
}

#[test]
fn test_anchor_only_keeps_headings_bare() {
    let mut tokens = load();
    let options = HeadingAnchorOptions::new()
        .with_heading_id(false)
        .with_anchor_class("permalink");
    add_heading_anchors(&mut tokens, &options);

    assert!(heading_ids(&tokens).iter().all(Option::is_none));
    let html = render_html(&tokens);
    assert!(html.starts_with(
        "<h1><a name=\"HelloWorld\" class=\"permalink\" href=\"#\"></a>Hello World</h1>\n"
    ));
}

#[test]
fn test_id_only_adds_no_tokens() {
    let mut tokens = load();
    let before = count_tokens(&tokens);
    add_heading_anchors(&mut tokens, &HeadingAnchorOptions::new().with_heading_anchor(false));
    assert_eq!(count_tokens(&tokens), before);
    assert!(render_html(&tokens).starts_with("<h1 id=\"HelloWorld\">Hello World</h1>\n"));
}

#[test]
fn test_paragraph_inline_untouched() {
    let untouched = load();
    let mut tokens = untouched.clone();
    add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    for idx in [3, 4, 5, 12] {
        assert_eq!(tokens[idx], untouched[idx]);
    }
}

#[test]
fn test_heading_without_content_field_is_skipped() {
    let mut tokens = load();
    tokens[1].content = None;
    let report = add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    assert_eq!(report.skipped, 1);
    assert_eq!(report.headings, 3);
    assert_eq!(tokens[0].attr_get("id"), None);
    assert_eq!(tokens[1].children.as_ref().unwrap().len(), 1);
}

#[test]
fn test_heading_followed_by_non_inline() {
    // Drop the inline token of the first heading: open is now followed by close.
    let mut tokens = load();
    tokens.remove(1);
    add_heading_anchors(&mut tokens, &HeadingAnchorOptions::default());
    assert_eq!(tokens[0].kind, TokenKind::HeadingOpen);
    assert_eq!(tokens[0].attr_get("id"), None);
    assert_eq!(heading_ids(&tokens).len(), 4);
    assert_eq!(heading_ids(&tokens)[1], Some("C%2B%2B%26Friends"));
}

#[test]
fn test_process_json_round_trip() {
    let options = HeadingAnchorOptions::from_json(r#"{"anchorClass": "a"}"#).unwrap();
    let out = process_json(DOCUMENT, &options).unwrap();
    let tokens = parse_tokens(&out).unwrap();
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens[0].attr_get("id"), Some("HelloWorld"));
    assert_eq!(tokens[0].map, Some((0, 1)));
    assert!(out.contains(r##"class=\"a\" href=\"#\""##));
}

#[test]
fn test_process_json_rejects_garbage() {
    assert!(process_json("{not json", &HeadingAnchorOptions::default()).is_err());
}

#[test]
fn test_core_ruler_matches_direct_call() {
    let mut direct = load();
    add_heading_anchors(&mut direct, &HeadingAnchorOptions::default());

    let mut chained = load();
    CoreRuler::with_heading_anchors(HeadingAnchorOptions::default()).run(&mut chained);

    assert_eq!(direct, chained);
}
