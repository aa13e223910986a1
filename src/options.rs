//! Options for heading id and anchor injection.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default CSS class on injected anchors.
pub const DEFAULT_ANCHOR_CLASS: &str = "markdown-it-headinganchor";

/// How headings are decorated.
///
/// Deserializes from the host's option object using its key names
/// (`anchorClass`, `addHeadingID`, `addHeadingAnchor`). Missing keys take
/// their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingAnchorOptions {
    /// CSS class on the injected `<a>` element.
    #[serde(rename = "anchorClass", alias = "anchor_class")]
    pub anchor_class: String,
    /// Set `id` on the heading open tag.
    #[serde(rename = "addHeadingID", alias = "add_heading_id")]
    pub add_heading_id: bool,
    /// Insert an empty `<a name=...>` as the first inline child.
    #[serde(rename = "addHeadingAnchor", alias = "add_heading_anchor")]
    pub add_heading_anchor: bool,
}

impl Default for HeadingAnchorOptions {
    fn default() -> Self {
        Self {
            anchor_class: DEFAULT_ANCHOR_CLASS.to_string(),
            add_heading_id: true,
            add_heading_anchor: true,
        }
    }
}

impl HeadingAnchorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_class(mut self, class: impl Into<String>) -> Self {
        self.anchor_class = class.into();
        self
    }

    pub fn with_heading_id(mut self, enabled: bool) -> Self {
        self.add_heading_id = enabled;
        self
    }

    pub fn with_heading_anchor(mut self, enabled: bool) -> Self {
        self.add_heading_anchor = enabled;
        self
    }

    /// Parse a JSON option object, filling in defaults.
    ///
    /// `null` and `{}` both yield the defaults. Any other non-object value,
    /// or a key with the wrong type, is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build options from an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| Error::InvalidOptions(e.to_string()))
            }
            other => Err(Error::InvalidOptions(format!(
                "expected an object, got {other}"
            ))),
        }
    }

    /// Whether applying these options changes anything.
    pub fn is_noop(&self) -> bool {
        !self.add_heading_id && !self.add_heading_anchor
    }
}
