//! Node-type aggregation

use crate::graph::{Graph, NodeType};
use std::collections::HashMap;

/// Group nodes by type and collect the property names seen for each
///
/// Nodes without a type are grouped under their label. Types are returned
/// in the order they are first seen.
pub fn extract_node_types(graph: &Graph) -> Vec<NodeType> {
    let mut types: Vec<NodeType> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for node in &graph.nodes {
        let name = node.effective_type();
        let idx = *index.entry(name).or_insert_with(|| {
            types.push(NodeType::new(name));
            types.len() - 1
        });

        let entry = &mut types[idx];
        entry.count += 1;
        entry.properties.extend(node.props.keys().cloned());
    }

    types
}
