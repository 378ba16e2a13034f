//! The line-oriented tuple format
//!
//! ```text
//! NODES:
//! c1, Customer, Person
//!
//! NODE_PROPS:
//! c1, name, string
//!
//! EDGES:
//! c1, o1, PLACED, outgoing
//!
//! EDGE_PROPS:
//! c1, o1, PLACED, placed_at, datetime
//!
//! CSV_HEADERS:
//! customer_id, order_id
//! ```
//!
//! Parsing is lenient: lines that do not fit their section are dropped,
//! never reported as errors.

mod parser;
mod section;
mod serializer;

pub use parser::{parse, parse_with_report, DroppedLines, ParseReport};
pub use section::Section;
pub use serializer::to_tuple_string;
