//! Graph transforms applied after parsing
//!
//! Each stage takes the graph by value and hands it back; none of them can
//! fail. The aggregator is a read-only projection.

mod aggregate;
mod dedup;
mod direction;
mod finalize;
mod reverse;

pub use aggregate::extract_node_types;
pub use dedup::deduplicate_nodes;
pub use direction::normalize_directions;
pub use finalize::finalize_structure;
pub use reverse::{
    reverse_label, PairTable, PrefixStrip, ReverseLabelMapper, ReverseStrategy, Synthesized,
    BUILTIN_PAIRS,
};
