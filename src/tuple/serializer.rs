//! Render a graph back into tuple text
//!
//! Used to re-prompt a model with the current graph state. Output re-parses
//! to the same graph up to element order (see `Graph::canonicalize`).

use super::section::Section;
use crate::graph::Graph;

/// Render a graph as tuple text
pub fn to_tuple_string(graph: &Graph) -> String {
    let mut out = format!("{}\n", Section::Nodes);
    for node in &graph.nodes {
        out.push_str(&format!("{}, {}", node.id, node.label));
        if !node.node_type.is_empty() {
            out.push_str(&format!(", {}", node.node_type));
        }
        out.push('\n');
    }

    if graph.has_node_props() {
        out.push_str(&format!("\n{}\n", Section::NodeProps));
        for node in &graph.nodes {
            for (name, value) in &node.props {
                out.push_str(&format!("{}, {}, {}\n", node.id, name, value));
            }
        }
    }

    if !graph.edges.is_empty() {
        out.push_str(&format!("\n{}\n", Section::Edges));
        for edge in &graph.edges {
            out.push_str(&format!("{}, {}, {}", edge.source, edge.target, edge.label));
            if let Some(direction) = edge.direction {
                out.push_str(&format!(", {}", direction));
            }
            out.push('\n');
        }
    }

    if graph.has_edge_props() {
        out.push_str(&format!("\n{}\n", Section::EdgeProps));
        for edge in &graph.edges {
            for (name, value) in &edge.props {
                out.push_str(&format!(
                    "{}, {}, {}, {}, {}\n",
                    edge.source, edge.target, edge.label, name, value
                ));
            }
        }
    }

    if !graph.csv_headers.is_empty() {
        out.push_str(&format!("\n{}\n", Section::CsvHeaders));
        out.push_str(&graph.csv_headers.join(", "));
        out.push('\n');
    }

    out
}
