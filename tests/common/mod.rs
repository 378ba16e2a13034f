//! Shared fixtures for tuplegraph integration tests
//!
//! `corpus` holds model outputs of the kind the pipeline sees in practice;
//! `random` builds seeded noise for totality checks.

pub mod corpus;
pub mod random;

pub use corpus::{columns, BATCH_OUTPUT, NOISY_OUTPUT, ORDERS_OUTPUT};
pub use random::{random_bytes_text, random_tuple_text};
