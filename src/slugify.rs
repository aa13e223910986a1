//! Pure slug generation for heading anchors.
//!
//! A slug is the heading text with every whitespace character removed and the
//! remainder percent-encoded, so `"Getting Started"` becomes
//! `"GettingStarted"`. Letter case and punctuation are kept.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped by ECMAScript's `encodeURIComponent`.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whether `c` is in the Unicode `Z` (separator) category.
///
/// Covers `Zs`, `Zl` and `Zp`. ASCII control whitespace (tab, newline) is
/// not a separator and is not matched.
pub fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Generate a slug from heading text using the Unicode `Z` whitespace class.
///
/// # Examples
///
/// ```
/// use headinganchor::slugify;
///
/// assert_eq!(slugify("Hello World"), "HelloWorld");
/// assert_eq!(slugify("C++ & Friends"), "C%2B%2B%26Friends");
/// assert_eq!(slugify("   "), "");
/// ```
pub fn slugify(text: &str) -> String {
    slugify_with(text, is_space_separator)
}

/// Generate a slug with a host-supplied whitespace predicate.
///
/// All matching characters are dropped, not only leading and trailing ones.
pub fn slugify_with<F>(text: &str, is_whitespace: F) -> String
where
    F: Fn(char) -> bool,
{
    let stripped: String = text.chars().filter(|&c| !is_whitespace(c)).collect();
    utf8_percent_encode(&stripped, URI_COMPONENT).to_string()
}
