//! Edge representation with an explicit direction

use super::node::{null_as_default, Properties, PropertyValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a relationship as declared in the tuple text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// source → target
    Outgoing,
    /// target → source; used for synthesized reverse edges
    Incoming,
    /// Both ways; rewritten by direction normalization
    Bidirectional,
}

impl Direction {
    /// Parse a direction token, ignoring case.
    ///
    /// Any other token is treated as absent, so finalization later defaults
    /// the edge to `Outgoing`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "outgoing" => Some(Self::Outgoing),
            "incoming" => Some(Self::Incoming),
            "bidirectional" => Some(Self::Bidirectional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outgoing => "outgoing",
            Self::Incoming => "incoming",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite identity of an edge: `source|target|label`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
    pub label: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// The key of the same relationship pointing the other way
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            label: self.label.clone(),
        }
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.source, self.target, self.label)
    }
}

/// A labeled edge between two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Relationship name (e.g., "WORKS_FOR", "PLACED")
    pub label: String,
    /// Additional properties
    #[serde(
        rename = "properties",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub props: Properties,
    /// `None` until normalization or finalization defaults it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Edge {
    /// Create an edge with no direction and no properties
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            props: BTreeMap::new(),
            direction: None,
        }
    }

    /// Set the direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Add a property to the edge
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.as_str(), self.target.as_str(), self.label.as_str())
    }
}
