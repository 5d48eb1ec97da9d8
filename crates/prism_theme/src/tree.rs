//! Open token tree
//!
//! [`TokenNode`] is the shape the variable flattener walks. Typed themes
//! convert into it exhaustively via [`Theme::to_tree`](crate::Theme::to_tree);
//! hand-written token documents (JSON, TOML) deserialize into it directly.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A nested token document: either a string leaf or an ordered group
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(String),
    Group(IndexMap<String, TokenNode>),
}

impl TokenNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        TokenNode::Leaf(value.into())
    }

    pub fn group<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TokenNode)>,
    {
        TokenNode::Group(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn empty_group() -> Self {
        TokenNode::Group(IndexMap::new())
    }

    /// Follow a key path from this node
    pub fn get_path(&self, path: &[&str]) -> Option<&TokenNode> {
        path.iter().try_fold(self, |node, key| match node {
            TokenNode::Group(children) => children.get(*key),
            TokenNode::Leaf(_) => None,
        })
    }

    /// Top-level keys, empty for a leaf
    pub fn keys(&self) -> Vec<&str> {
        match self {
            TokenNode::Group(children) => children.keys().map(String::as_str).collect(),
            TokenNode::Leaf(_) => Vec::new(),
        }
    }

    /// Number of leaves reachable from this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TokenNode::Leaf(_) => 1,
            TokenNode::Group(children) => children.values().map(TokenNode::leaf_count).sum(),
        }
    }

    /// Parse a JSON token document
    pub fn from_json(src: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

/// Plain-object semantics: objects become groups, every other value becomes
/// a leaf holding its default string coercion (arrays join with `,`).
impl From<serde_json::Value> for TokenNode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                TokenNode::group(map.into_iter().map(|(k, v)| (k, TokenNode::from(v))))
            }
            other => TokenNode::Leaf(coerce_to_string(&other)),
        }
    }
}

fn coerce_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Nested nulls coerce to empty strings inside a joined array
                serde_json::Value::Null => String::new(),
                serde_json::Value::Object(_) => "[object Object]".to_string(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(TokenNode::from)
    }
}
