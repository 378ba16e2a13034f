//! Core graph data structures

mod edge;
mod error;
mod model;
mod node;

#[cfg(test)]
mod tests;

pub use edge::{Direction, Edge, EdgeKey};
pub use error::{GraphError, GraphResult};
pub use model::{graph_json_schema, Graph, NodeType};
pub use node::{Node, Properties, PropertyValue};
