//! tuplegraph: lenient parsing and normalization of LLM-generated graphs
//!
//! Turns the line-oriented "tuple format" a model produces into a
//! deduplicated, direction-consistent graph ready for JSON hand-off.
//!
//! # Core Concepts
//!
//! - **Tuple format**: `NODES:` / `NODE_PROPS:` / `EDGES:` / `EDGE_PROPS:` /
//!   `CSV_HEADERS:` sections of comma-separated lines
//! - **Survivor**: the first node seen for a label; later nodes with the same
//!   label are merged into it
//! - **Provenance**: the source column names attached to a graph
//!
//! # Example
//!
//! ```
//! use tuplegraph::Pipeline;
//!
//! let text = "NODES:\nc1, Customer, Person\n\nEDGES:\nc1, o1, PLACED, outgoing\n";
//! let output = Pipeline::default().run(text, None);
//! assert_eq!(output.graph.node_count(), 1);
//! assert_eq!(output.graph.edge_count(), 1);
//! ```

pub mod config;
mod graph;
pub mod pipeline;
pub mod transform;
pub mod tuple;

pub use config::{ConfigError, ConfigResult, PipelineConfig};
pub use graph::{
    graph_json_schema, Direction, Edge, EdgeKey, Graph, GraphError, GraphResult, Node, NodeType,
    Properties, PropertyValue,
};
pub use pipeline::{Pipeline, PipelineOutput};
pub use transform::{
    deduplicate_nodes, extract_node_types, finalize_structure, normalize_directions,
    reverse_label, ReverseLabelMapper,
};
pub use tuple::{parse, parse_with_report, to_tuple_string, ParseReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
