//! The parse → normalize → finalize → deduplicate pipeline
//!
//! Takes raw model output and the column names it was generated from, and
//! returns the canonical graph. Every invocation works on its own graph;
//! a `Pipeline` holds only configuration and can be shared.

use crate::config::PipelineConfig;
use crate::graph::Graph;
use crate::transform::{
    deduplicate_nodes, finalize_structure, normalize_directions, ReverseLabelMapper,
};
use crate::tuple::{self, ParseReport};
use tracing::debug;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// The canonical graph
    pub graph: Graph,
    /// Lines the parser dropped
    pub report: ParseReport,
    /// Reverse edges added by direction normalization
    pub reverse_edges_added: usize,
    /// Nodes folded into a survivor by deduplication
    pub nodes_merged: usize,
}

/// Configured pipeline
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    mapper: ReverseLabelMapper,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let mapper = ReverseLabelMapper::with_pairs(config.reverse_pairs.iter().cloned());
        Self { config, mapper }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every enabled stage over `text`
    ///
    /// `column_names`, when non-empty, become the graph's provenance headers.
    pub fn run(&self, text: &str, column_names: Option<&[String]>) -> PipelineOutput {
        let (mut graph, report) = tuple::parse_with_report(text);

        let mut reverse_edges_added = 0;
        if self.config.normalize_directions {
            let before = graph.edge_count();
            graph = normalize_directions(graph, &self.mapper);
            reverse_edges_added = graph.edge_count() - before;
        }

        graph = finalize_structure(graph, column_names);

        let mut nodes_merged = 0;
        if self.config.deduplicate {
            let before = graph.node_count();
            graph = deduplicate_nodes(graph);
            nodes_merged = before - graph.node_count();
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped_lines = report.dropped.total(),
            reverse_edges_added,
            nodes_merged,
            "tuple graph pipeline complete"
        );

        PipelineOutput {
            graph,
            report,
            reverse_edges_added,
            nodes_merged,
        }
    }

    /// Run over text generated from several column sets at once
    ///
    /// The sets are flattened in order into one provenance list; empty sets
    /// are skipped.
    pub fn run_batch(&self, text: &str, column_sets: &[Vec<String>]) -> PipelineOutput {
        let columns: Vec<String> = column_sets
            .iter()
            .filter(|set| !set.is_empty())
            .flatten()
            .cloned()
            .collect();
        debug!(sets = column_sets.len(), columns = columns.len(), "batch provenance");

        self.run(text, Some(columns.as_slice()))
    }
}
