//! Structure finalization: provenance and defaults

use crate::graph::{Direction, Graph};

/// Attach provenance column names and default every edge direction
///
/// Headers are only replaced when a non-empty list is supplied. Property
/// maps need no initialization: every node and edge owns one.
pub fn finalize_structure(mut graph: Graph, column_names: Option<&[String]>) -> Graph {
    if let Some(columns) = column_names.filter(|c| !c.is_empty()) {
        graph.csv_headers = columns.to_vec();
    }

    for edge in &mut graph.edges {
        edge.direction.get_or_insert(Direction::Outgoing);
    }

    graph
}
