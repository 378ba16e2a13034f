//! Reverse relationship labels
//!
//! A label is resolved by trying strategies in order; the first one that
//! produces a label wins:
//!
//! 1. exact pair table (label as key, then label as value)
//! 2. `HAS_` prefix strip
//! 3. synthesized `REVERSE_<label>`

use std::sync::OnceLock;

/// Known relationship pairs. Value-side lookups resolve to the first entry
/// in this order, so `CONTAINS` reverses to `BELONGS_TO`.
pub const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("BELONGS_TO", "CONTAINS"),
    ("WORKS_FOR", "EMPLOYS"),
    ("PART_OF", "HAS_PART"),
    ("CHILD_OF", "PARENT_OF"),
    ("MEMBER_OF", "HAS_MEMBER"),
    ("REPORTS_TO", "MANAGES"),
    ("MANAGED_BY", "MANAGES"),
    ("ASSIGNED_TO", "ASSIGNED"),
    ("OWNED_BY", "OWNS"),
    ("CREATED_BY", "CREATED"),
    ("LOCATED_IN", "CONTAINS"),
    ("IN", "CONTAINS"),
];

/// One way of deriving the inverse of a relationship label.
pub trait ReverseStrategy: Send + Sync {
    /// Return the inverse label, or `None` to defer to the next strategy.
    fn resolve(&self, label: &str) -> Option<String>;
}

/// Exact lookup in an ordered table of `(label, inverse)` pairs
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    pairs: Vec<(String, String)>,
}

impl PairTable {
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(a, b)| (a.into(), b.into())).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_PAIRS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ReverseStrategy for PairTable {
    fn resolve(&self, label: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.clone())
            .or_else(|| {
                self.pairs
                    .iter()
                    .find(|(_, value)| value == label)
                    .map(|(key, _)| key.clone())
            })
    }
}

/// `HAS_PART` → `PART`
#[derive(Debug, Clone)]
pub struct PrefixStrip {
    prefix: String,
}

impl PrefixStrip {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Default for PrefixStrip {
    fn default() -> Self {
        Self::new("HAS_")
    }
}

impl ReverseStrategy for PrefixStrip {
    fn resolve(&self, label: &str) -> Option<String> {
        label.strip_prefix(self.prefix.as_str()).map(String::from)
    }
}

/// `PLACED` → `REVERSE_PLACED`. Always resolves.
#[derive(Debug, Clone)]
pub struct Synthesized {
    prefix: String,
}

impl Synthesized {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Default for Synthesized {
    fn default() -> Self {
        Self::new("REVERSE_")
    }
}

impl ReverseStrategy for Synthesized {
    fn resolve(&self, label: &str) -> Option<String> {
        Some(format!("{}{}", self.prefix, label))
    }
}

/// Ordered list of reverse-label strategies
pub struct ReverseLabelMapper {
    strategies: Vec<Box<dyn ReverseStrategy>>,
}

impl ReverseLabelMapper {
    /// Build a mapper from explicit strategies, tried in order
    pub fn new(strategies: Vec<Box<dyn ReverseStrategy>>) -> Self {
        Self { strategies }
    }

    /// Built-in strategies, preceded by a table of extra pairs
    pub fn with_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let extra = PairTable::new(pairs);
        let mut mapper = Self::default();
        if !extra.is_empty() {
            mapper.strategies.insert(0, Box::new(extra));
        }
        mapper
    }

    /// The inverse of `label`
    pub fn reverse(&self, label: &str) -> String {
        self.strategies
            .iter()
            .find_map(|s| s.resolve(label))
            .unwrap_or_else(|| format!("REVERSE_{}", label))
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl Default for ReverseLabelMapper {
    fn default() -> Self {
        Self::new(vec![
            Box::new(PairTable::builtin()) as Box<dyn ReverseStrategy>,
            Box::new(PrefixStrip::default()),
            Box::new(Synthesized::default()),
        ])
    }
}

impl std::fmt::Debug for ReverseLabelMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReverseLabelMapper")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

/// Reverse a label with the built-in strategies
pub fn reverse_label(label: &str) -> String {
    static DEFAULT: OnceLock<ReverseLabelMapper> = OnceLock::new();
    DEFAULT.get_or_init(ReverseLabelMapper::default).reverse(label)
}
