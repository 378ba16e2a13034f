//! Node representation in the tuple graph

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Typed property values
///
/// The tuple parser only produces `String` values (the declared type tag);
/// the other variants exist so arbitrary JSON property maps deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(BTreeMap<String, PropertyValue>),
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            // Compound values have no tuple spelling; fall back to compact JSON
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(std::fmt::Error),
            },
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Properties collection, ordered by name
pub type Properties = BTreeMap<String, PropertyValue>;

/// Read an explicit JSON `null` as the empty value
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A node in the tuple graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    /// Caller-supplied identifier, unique before deduplication
    pub id: String,
    /// Display label; deduplication keys on it
    pub label: String,
    /// Property name → declared type tag
    #[serde(
        rename = "properties",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub props: Properties,
    /// Node type; empty when the model gave none
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub node_type: String,
}

impl Node {
    /// Create a node with no type and no properties
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            props: BTreeMap::new(),
            node_type: String::new(),
        }
    }

    /// Set the node type
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    /// Add a property to the node
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// The type used for aggregation: `node_type`, or `label` when empty
    pub fn effective_type(&self) -> &str {
        if self.node_type.is_empty() {
            &self.label
        } else {
            &self.node_type
        }
    }
}
