//! Lenient tuple-text parser
//!
//! Total over all inputs: malformed lines are counted and dropped, never
//! turned into errors.

use super::section::Section;
use crate::graph::{Direction, Edge, EdgeKey, Graph, Node, PropertyValue};
use std::collections::HashMap;

/// Per-section counts of dropped data lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DroppedLines {
    /// Data lines before the first section header
    pub preamble: usize,
    pub nodes: usize,
    /// Too few fields, or the node id was not declared earlier
    pub node_props: usize,
    pub edges: usize,
    /// Too few fields, or the edge was not declared earlier
    pub edge_props: usize,
}

impl DroppedLines {
    fn record(&mut self, section: Section) {
        match section {
            Section::Nodes => self.nodes += 1,
            Section::NodeProps => self.node_props += 1,
            Section::Edges => self.edges += 1,
            Section::EdgeProps => self.edge_props += 1,
            // Any non-empty line is a valid header list
            Section::CsvHeaders => {}
        }
    }

    pub fn total(&self) -> usize {
        self.preamble + self.nodes + self.node_props + self.edges + self.edge_props
    }
}

/// What the parser kept and what it dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Non-blank, non-comment, non-header lines seen
    pub data_lines: usize,
    pub dropped: DroppedLines,
}

impl ParseReport {
    pub fn kept_lines(&self) -> usize {
        self.data_lines - self.dropped.total()
    }
}

impl std::fmt::Display for ParseReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = &self.dropped;
        write!(
            f,
            "{} data lines, {} dropped (preamble {}, nodes {}, node props {}, edges {}, edge props {})",
            self.data_lines,
            d.total(),
            d.preamble,
            d.nodes,
            d.node_props,
            d.edges,
            d.edge_props
        )
    }
}

/// Parse tuple text into a graph
pub fn parse(text: &str) -> Graph {
    parse_with_report(text).0
}

/// Parse tuple text, also returning how many lines were dropped per section
pub fn parse_with_report(text: &str) -> (Graph, ParseReport) {
    let mut state = ParseState::default();
    let mut report = ParseReport::default();
    let mut section: Option<Section> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(next) = Section::from_header(line) {
            section = Some(next);
            continue;
        }

        report.data_lines += 1;

        let Some(current) = section else {
            report.dropped.preamble += 1;
            continue;
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < current.min_fields() {
            report.dropped.record(current);
            continue;
        }

        let kept = match current {
            Section::Nodes => state.add_node(&fields),
            Section::NodeProps => state.add_node_prop(&fields),
            Section::Edges => state.add_edge(&fields),
            Section::EdgeProps => state.add_edge_prop(&fields),
            Section::CsvHeaders => state.set_headers(line),
        };
        if !kept {
            report.dropped.record(current);
        }
    }

    (state.graph, report)
}

/// Graph under construction plus lookup tables for property sections
#[derive(Default)]
struct ParseState {
    graph: Graph,
    /// node id → index of the most recent node declared with it
    nodes_by_id: HashMap<String, usize>,
    /// edge key → index of the most recent edge declared with it
    edges_by_key: HashMap<EdgeKey, usize>,
}

impl ParseState {
    fn add_node(&mut self, fields: &[&str]) -> bool {
        let mut node = Node::new(fields[0], fields[1]);
        if let Some(node_type) = fields.get(2) {
            node.node_type = node_type.to_string();
        }

        self.nodes_by_id.insert(node.id.clone(), self.graph.nodes.len());
        self.graph.nodes.push(node);
        true
    }

    fn add_node_prop(&mut self, fields: &[&str]) -> bool {
        // Forward references are not resolved
        let Some(&idx) = self.nodes_by_id.get(fields[0]) else {
            return false;
        };
        self.graph.nodes[idx]
            .props
            .insert(fields[1].to_string(), PropertyValue::from(fields[2]));
        true
    }

    fn add_edge(&mut self, fields: &[&str]) -> bool {
        let mut edge = Edge::new(fields[0], fields[1], fields[2]);
        edge.direction = fields.get(3).and_then(|d| Direction::parse(d));

        self.edges_by_key.insert(edge.key(), self.graph.edges.len());
        self.graph.edges.push(edge);
        true
    }

    fn add_edge_prop(&mut self, fields: &[&str]) -> bool {
        let key = EdgeKey::new(fields[0], fields[1], fields[2]);
        let Some(&idx) = self.edges_by_key.get(&key) else {
            return false;
        };
        self.graph.edges[idx]
            .props
            .insert(fields[3].to_string(), PropertyValue::from(fields[4]));
        true
    }

    fn set_headers(&mut self, line: &str) -> bool {
        self.graph.csv_headers = line.split(", ").map(String::from).collect();
        true
    }
}
