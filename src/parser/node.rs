//! Document Tree
//!
//! Untyped tree produced by parsing one workflow file. No schema knowledge
//! lives here - pure data representation.

use serde_yaml::Value;

/// A node of a parsed document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Explicit `null`, `~` or an empty document
    Null,
    /// Any scalar, kept in its textual form
    Scalar(String),
    /// A sequence of nodes
    Sequence(Vec<Node>),
    /// A mapping in document order
    Mapping(Vec<(String, Node)>),
}

impl Node {
    /// Look up a mapping entry by exact key; `None` for non-mappings
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Mapping entries, if this node is a mapping
    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Sequence items, if this node is a sequence
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the node shape, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Number(n) => Node::Scalar(n.to_string()),
            Value::String(s) => Node::Scalar(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(mapping) => Node::Mapping(
                mapping
                    .into_iter()
                    .map(|(k, v)| (key_to_string(k), Node::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

/// Render a mapping key as a string
fn key_to_string(key: Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        Value::Tagged(tagged) => key_to_string(tagged.value),
        complex => serde_yaml::to_string(&complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
