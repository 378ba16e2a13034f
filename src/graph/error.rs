//! Errors raised at the JSON boundary

use thiserror::Error;

/// Errors that can occur when a graph crosses the JSON boundary
///
/// Parsing, normalization and deduplication are total and never produce one.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for graph serialization
pub type GraphResult<T> = Result<T, GraphError>;
