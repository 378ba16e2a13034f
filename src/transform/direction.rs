//! Direction normalization
//!
//! Rewrites every bidirectional edge into an outgoing edge plus a
//! synthesized incoming reverse edge, so downstream consumers only ever
//! see directed relationships.

use super::reverse::ReverseLabelMapper;
use crate::graph::{Direction, Edge, EdgeKey, Graph};
use std::collections::HashSet;

/// Split bidirectional edges and default missing directions to outgoing
///
/// A reverse edge is only synthesized when no edge `target → source` with
/// the *original* label existed before normalization started. Reverse edges
/// are appended after the scan.
pub fn normalize_directions(mut graph: Graph, mapper: &ReverseLabelMapper) -> Graph {
    let existing: HashSet<EdgeKey> = graph.edges.iter().map(Edge::key).collect();

    let mut reversed = Vec::new();
    for edge in &mut graph.edges {
        match edge.direction {
            Some(Direction::Bidirectional) => {
                if !existing.contains(&edge.key().reversed()) {
                    reversed.push(Edge {
                        source: edge.target.clone(),
                        target: edge.source.clone(),
                        label: mapper.reverse(&edge.label),
                        props: edge.props.clone(),
                        direction: Some(Direction::Incoming),
                    });
                }
                edge.direction = Some(Direction::Outgoing);
            }
            None => edge.direction = Some(Direction::Outgoing),
            Some(_) => {}
        }
    }

    graph.edges.extend(reversed);
    graph
}
