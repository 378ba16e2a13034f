//! Graph: the canonical value handed from stage to stage

use super::edge::Edge;
use super::error::GraphResult;
use super::node::{null_as_default, Node};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Nodes, edges and the source column names they were derived from
///
/// Node order is first-seen order and is kept stable so serialization is
/// reproducible. Edge endpoints are not validated against `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Graph {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,
    /// Provenance only; `null` reads as empty
    #[serde(rename = "csvHeaders", default, deserialize_with = "null_as_default")]
    pub csv_headers: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append an edge
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Replace the provenance column names
    pub fn with_csv_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.csv_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.csv_headers.is_empty()
    }

    /// Get the first node with the given id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether any node carries at least one property
    pub fn has_node_props(&self) -> bool {
        self.nodes.iter().any(|n| !n.props.is_empty())
    }

    /// Whether any edge carries at least one property
    pub fn has_edge_props(&self) -> bool {
        self.edges.iter().any(|e| !e.props.is_empty())
    }

    /// Edges whose source or target does not name a node in `nodes`
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(move |e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
    }

    /// Sort nodes by id and edges by `source|target|label`
    ///
    /// Used to compare graphs whose element order differs, e.g. after a
    /// serialize/parse round trip.
    pub fn canonicalize(&mut self) {
        self.nodes
            .sort_by(|a, b| (&a.id, &a.label).cmp(&(&b.id, &b.label)));
        self.edges.sort_by_key(|e| e.key());
    }

    /// Serialize to the external JSON shape
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from the external JSON shape
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// JSON Schema of the external graph contract
pub fn graph_json_schema() -> serde_json::Value {
    serde_json::Value::from(schemars::schema_for!(Graph))
}

/// Per-type summary derived from a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    pub name: String,
    pub count: usize,
    /// Distinct property names seen across all nodes of this type
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub properties: BTreeSet<String>,
}

impl NodeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            properties: BTreeSet::new(),
        }
    }
}
