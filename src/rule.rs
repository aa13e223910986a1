//! Core rule chain run between parsing and rendering.
//!
//! A host registers document-level transforms on a [`CoreRuler`] and runs the
//! whole chain once per parsed document. [`HeadingAnchorRule`] is the
//! heading id/anchor transform in that form, registered as
//! `heading_anchors`.
//!
//! ```
//! use headinganchor::{CoreRuler, HeadingAnchorOptions, HeadingAnchorRule};
//!
//! let mut ruler = CoreRuler::new();
//! ruler.push(HeadingAnchorRule::new(HeadingAnchorOptions::default()));
//! assert_eq!(ruler.names().collect::<Vec<_>>(), ["heading_anchors"]);
//! ```

use log::debug;

use crate::anchor::{AnchorReport, add_heading_anchors};
use crate::error::{Error, Result};
use crate::options::HeadingAnchorOptions;
use crate::token::Token;

/// A named transform over one document's token stream.
pub trait CoreRule {
    /// Name the rule is registered under.
    fn name(&self) -> &str;

    /// Transform the document in place.
    fn apply(&self, tokens: &mut Vec<Token>);
}

/// Heading id and anchor injection as a core rule.
#[derive(Debug, Clone, Default)]
pub struct HeadingAnchorRule {
    options: HeadingAnchorOptions,
}

impl HeadingAnchorRule {
    pub const NAME: &'static str = "heading_anchors";

    pub fn new(options: HeadingAnchorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HeadingAnchorOptions {
        &self.options
    }

    /// Run on a token slice and report what changed.
    pub fn run(&self, tokens: &mut [Token]) -> AnchorReport {
        add_heading_anchors(tokens, &self.options)
    }
}

impl CoreRule for HeadingAnchorRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, tokens: &mut Vec<Token>) {
        self.run(tokens);
    }
}

struct Entry {
    rule: Box<dyn CoreRule + Send + Sync>,
    enabled: bool,
}

/// Ordered list of core rules.
#[derive(Default)]
pub struct CoreRuler {
    rules: Vec<Entry>,
}

impl CoreRuler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain holding only the heading anchor rule.
    pub fn with_heading_anchors(options: HeadingAnchorOptions) -> Self {
        let mut ruler = Self::new();
        ruler.push(HeadingAnchorRule::new(options));
        ruler
    }

    /// Append a rule to the end of the chain.
    pub fn push<R>(&mut self, rule: R)
    where
        R: CoreRule + Send + Sync + 'static,
    {
        self.rules.push(Entry {
            rule: Box::new(rule),
            enabled: true,
        });
    }

    /// Insert a rule directly before the rule named `before`.
    pub fn before<R>(&mut self, before: &str, rule: R) -> Result<()>
    where
        R: CoreRule + Send + Sync + 'static,
    {
        let idx = self.position(before)?;
        self.rules.insert(
            idx,
            Entry {
                rule: Box::new(rule),
                enabled: true,
            },
        );
        Ok(())
    }

    /// Insert a rule directly after the rule named `after`.
    pub fn after<R>(&mut self, after: &str, rule: R) -> Result<()>
    where
        R: CoreRule + Send + Sync + 'static,
    {
        let idx = self.position(after)?;
        self.rules.insert(
            idx + 1,
            Entry {
                rule: Box::new(rule),
                enabled: true,
            },
        );
        Ok(())
    }

    pub fn enable(&mut self, name: &str) -> Result<()> {
        let idx = self.position(name)?;
        self.rules[idx].enabled = true;
        Ok(())
    }

    pub fn disable(&mut self, name: &str) -> Result<()> {
        let idx = self.position(name)?;
        self.rules[idx].enabled = false;
        Ok(())
    }

    /// Registered rule names in run order, enabled or not.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|e| e.rule.name())
    }

    /// Run every enabled rule, in order, over one document.
    pub fn run(&self, tokens: &mut Vec<Token>) {
        for entry in self.rules.iter().filter(|e| e.enabled) {
            debug!("core rule {}", entry.rule.name());
            entry.rule.apply(tokens);
        }
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.rules
            .iter()
            .position(|e| e.rule.name() == name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }
}
