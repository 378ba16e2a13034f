//! Node deduplication by label

use crate::graph::{EdgeKey, Graph, Node};
use std::collections::{HashMap, HashSet};

/// Merge nodes that share a label and rewire their edges
///
/// The first node seen for a label survives. Later nodes with the same label
/// merge their properties into it (later values win) and their ids are
/// remapped to the survivor's id. Edge endpoints are rewritten through that
/// remap, then edges are deduplicated on `source|target|label`, keeping the
/// first occurrence.
///
/// Labels are compared exactly: `Customer` and `customer` both survive.
/// Running this on its own output changes nothing.
pub fn deduplicate_nodes(graph: Graph) -> Graph {
    let Graph {
        nodes,
        edges,
        csv_headers,
    } = graph;

    let mut survivors: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut by_label: HashMap<String, usize> = HashMap::new();
    let mut remap: HashMap<String, String> = HashMap::new();

    for node in nodes {
        match by_label.get(&node.label) {
            Some(&idx) => {
                let survivor = &mut survivors[idx];
                remap.insert(node.id, survivor.id.clone());
                survivor.props.extend(node.props);
            }
            None => {
                by_label.insert(node.label.clone(), survivors.len());
                survivors.push(node);
            }
        }
    }

    let mut seen: HashSet<EdgeKey> = HashSet::with_capacity(edges.len());
    let edges = edges
        .into_iter()
        .map(|mut edge| {
            if let Some(id) = remap.get(&edge.source) {
                edge.source = id.clone();
            }
            if let Some(id) = remap.get(&edge.target) {
                edge.target = id.clone();
            }
            edge
        })
        .filter(|edge| seen.insert(edge.key()))
        .collect();

    Graph {
        nodes: survivors,
        edges,
        csv_headers,
    }
}
