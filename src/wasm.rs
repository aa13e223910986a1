//! WASM bindings for JavaScript Markdown hosts.
//!
//! A markdown-it core rule can hand `JSON.stringify(state.tokens)` to
//! [`heading_anchors`] and replace its tokens with the parsed result.

use wasm_bindgen::prelude::*;

use crate::options::HeadingAnchorOptions;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Add heading ids and anchors to a JSON token array.
///
/// `options_json` may be empty, `null`, or a partial option object.
#[wasm_bindgen]
pub fn heading_anchors(tokens_json: &str, options_json: &str) -> Result<String, JsValue> {
    let options = if options_json.trim().is_empty() {
        HeadingAnchorOptions::default()
    } else {
        HeadingAnchorOptions::from_json(options_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    crate::process_json(tokens_json, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Slug for a single heading text.
#[wasm_bindgen]
pub fn slugify(text: &str) -> String {
    crate::slugify::slugify(text)
}
