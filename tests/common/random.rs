//! Seeded random inputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOKENS: &[&str] = &[
    "NODES:", "NODE_PROPS:", "EDGES:", "EDGE_PROPS:", "CSV_HEADERS:", "#", ",", ", ", "\n",
    "\n\n", "\r\n", " ", "n1", "n2", "n3", "Customer", "Order", "PLACED", "bidirectional",
    "outgoing", "incoming", "HAS_PART", "BELONGS_TO", "string", "int", "é", "\u{0}",
];

/// Arbitrary bytes decoded lossily as UTF-8
pub fn random_bytes_text(seed: u64, max_len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = rng.gen_range(0..=max_len);
    let bytes: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Token soup built from section headers, separators and plausible fields
pub fn random_tuple_text(seed: u64, max_tokens: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(0..=max_tokens);
    (0..count)
        .map(|_| TOKENS[rng.gen_range(0..TOKENS.len())])
        .collect()
}
