//! Section headers of the tuple format

/// A named section of tuple text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `id, label[, type]`
    Nodes,
    /// `nodeId, propName, propType`
    NodeProps,
    /// `source, target, label[, direction]`
    Edges,
    /// `source, target, label, propName, propType`
    EdgeProps,
    /// A single `", "`-joined line
    CsvHeaders,
}

impl Section {
    /// All sections in serialization order
    pub const ALL: [Section; 5] = [
        Section::Nodes,
        Section::NodeProps,
        Section::Edges,
        Section::EdgeProps,
        Section::CsvHeaders,
    ];

    /// Recognize a header line. The match is exact on the trimmed line.
    pub fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.header() == line)
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Nodes => "NODES:",
            Self::NodeProps => "NODE_PROPS:",
            Self::Edges => "EDGES:",
            Self::EdgeProps => "EDGE_PROPS:",
            Self::CsvHeaders => "CSV_HEADERS:",
        }
    }

    /// Fewest comma-separated fields a data line needs to be kept
    pub fn min_fields(&self) -> usize {
        match self {
            Self::Nodes => 2,
            Self::NodeProps => 3,
            Self::Edges => 3,
            Self::EdgeProps => 5,
            Self::CsvHeaders => 1,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_match_exactly() {
        assert_eq!(Section::from_header("NODES:"), Some(Section::Nodes));
        assert_eq!(Section::from_header("EDGE_PROPS:"), Some(Section::EdgeProps));
        assert_eq!(Section::from_header("nodes:"), None);
        assert_eq!(Section::from_header("NODES"), None);
        assert_eq!(Section::from_header("RELATIONSHIPS:"), None);
    }
}
