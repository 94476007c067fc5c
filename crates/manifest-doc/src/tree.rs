//! Manifest document trees
//!
//! Both the template manifest and the deployed manifest share one tree
//! shape. Leaves are strings (the only place placeholders can appear);
//! objects keep their author-declared field order.

use serde_json::Value;

use crate::error::{Error, Result};

/// One node of a manifest document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A string leaf. In a template it may contain `${{NAME}}` tokens.
    Leaf(String),
    /// A nested object with ordered fields.
    Object(Vec<(String, Node)>),
    /// An ordered list of nodes.
    List(Vec<Node>),
    /// A non-string scalar (number, boolean, null). Never parameterized.
    Scalar(Value),
}

impl Node {
    /// Parse a JSON document into a tree.
    pub fn parse(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::from_value(value))
    }

    /// Parse a JSON document whose root must be an object.
    ///
    /// Manifest files are always rooted at an object; anything else is a
    /// malformed document rather than structural drift.
    pub fn parse_document(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        match value {
            Value::Object(_) => Ok(Self::from_value(value)),
            other => Err(Error::UnexpectedRoot {
                found: json_type_name(&other),
            }),
        }
    }

    /// Convert a parsed JSON value into a tree.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Node::Leaf(s),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from_value(value)))
                    .collect(),
            ),
            Value::Array(items) => Node::List(items.into_iter().map(Node::from_value).collect()),
            other => Node::Scalar(other),
        }
    }

    /// Convert the tree back into a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Leaf(s) => Value::String(s.clone()),
            Node::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
            Node::List(items) => Value::Array(items.iter().map(Node::to_value).collect()),
            Node::Scalar(value) => value.clone(),
        }
    }

    /// Look up a direct child field of an object node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(fields) => fields
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    /// The leaf string, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(s) => Some(s),
            _ => None,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A segment of a field path - either an object key or a list index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A key in an object (e.g., "name" in "bot.name")
    Key(String),
    /// An index in a list (e.g., 0 in `commands[0]`)
    Index(usize),
}

/// Location of a field within a manifest tree, for diagnostics.
///
/// Displays with dot-separated keys and bracketed indices, e.g.
/// `bots[0].commandLists[1].title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The root path (empty).
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with an object key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Extend the path with a list index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if position > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{key}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
