//! Token primitives and ordered token scales

use std::fmt;

use super::shadow::{shadow_css, ShadowLayer};
use crate::tree::TokenNode;

/// An immutable leaf style value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Hex color, e.g. `#0ea5e9`
    Color(&'static str),
    /// Length with a unit, e.g. `1rem`, `640px`
    Dimension(&'static str),
    /// Ordered font family names, most preferred first
    FontStack(&'static [&'static str]),
    /// Time value, e.g. `150ms`
    Duration(&'static str),
    /// Timing function, e.g. `cubic-bezier(0.4, 0, 0.2, 1)`
    Easing(&'static str),
    /// Unitless number (z-index, font weight)
    Number(i32),
    /// Layered box shadow; empty means `none`
    Shadow(&'static [ShadowLayer]),
    /// Any other CSS text (`auto`, `none`)
    Keyword(&'static str),
}

impl Token {
    /// Render the value as CSS text.
    ///
    /// Font stacks are joined with `, ` and multi-word family names are quoted.
    pub fn to_css_value(&self) -> String {
        match self {
            Token::Color(v)
            | Token::Dimension(v)
            | Token::Duration(v)
            | Token::Easing(v)
            | Token::Keyword(v) => (*v).to_string(),
            Token::Number(n) => n.to_string(),
            Token::Shadow(layers) => shadow_css(layers),
            Token::FontStack(families) => families
                .iter()
                .map(|family| {
                    if family.contains(char::is_whitespace) && !family.starts_with('"') {
                        format!("\"{family}\"")
                    } else {
                        (*family).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_value())
    }
}

/// Key of one step within a scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKey {
    /// Numeric weight (`50`, `100` … `950`, or a spacing multiplier)
    Shade(u16),
    /// Semantic key (`DEFAULT`, `sm`, `base`, `2xl`, …)
    Named(&'static str),
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKey::Shade(n) => write!(f, "{n}"),
            StepKey::Named(s) => f.write_str(s),
        }
    }
}

impl From<u16> for StepKey {
    fn from(n: u16) -> Self {
        StepKey::Shade(n)
    }
}

impl From<&'static str> for StepKey {
    fn from(s: &'static str) -> Self {
        StepKey::Named(s)
    }
}

/// Ordered mapping from step key to token.
///
/// Entries keep insertion order; inserting an existing key replaces the
/// token in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenScale {
    entries: Vec<(StepKey, Token)>,
}

impl TokenScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<StepKey>, token: Token) -> Self {
        self.insert(key, token);
        self
    }

    pub fn insert(&mut self, key: impl Into<StepKey>, token: Token) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = token,
            None => self.entries.push((key, token)),
        }
    }

    pub fn get(&self, key: impl Into<StepKey>) -> Option<&Token> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    /// Look up a step by its rendered key (`"500"`, `"DEFAULT"`)
    pub fn get_by_name(&self, key: &str) -> Option<&Token> {
        self.entries
            .iter()
            .find(|(k, _)| k.to_string() == key)
            .map(|(_, t)| t)
    }

    pub fn keys(&self) -> impl Iterator<Item = &StepKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StepKey, &Token)> {
        self.entries.iter().map(|(k, t)| (k, t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a group of string leaves for flattening
    pub fn to_node(&self) -> TokenNode {
        TokenNode::group(
            self.entries
                .iter()
                .map(|(k, t)| (k.to_string(), TokenNode::leaf(t.to_css_value()))),
        )
    }
}

impl<K: Into<StepKey>> FromIterator<(K, Token)> for TokenScale {
    fn from_iter<I: IntoIterator<Item = (K, Token)>>(iter: I) -> Self {
        let mut scale = TokenScale::new();
        for (k, t) in iter {
            scale.insert(k, t);
        }
        scale
    }
}
