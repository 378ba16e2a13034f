//! Representative model outputs

/// A clean response for an orders CSV
pub const ORDERS_OUTPUT: &str = "\
NODES:
c1, Customer, Person
o1, Order
p1, Product

NODE_PROPS:
c1, name, string
c1, email, string
o1, order_date, datetime
p1, price, float

EDGES:
c1, o1, PLACED, outgoing
o1, p1, CONTAINS
p1, o1, PART_OF, bidirectional

EDGE_PROPS:
o1, p1, CONTAINS, quantity, int

CSV_HEADERS:
customer_name, customer_email, order_date, product_price, quantity
";

/// A response with chatter, comments, malformed lines and duplicates
pub const NOISY_OUTPUT: &str = "\
Sure! Here is the graph you asked for:

NODES:
# customers
c1, Customer, Person
c2, Customer, Person
o1, Order
broken-line
e1, Employee, Person

NODE_PROPS:
c1, name, string
c2, loyalty_tier, string
x9, ghost_prop, string
c2, only_two

EDGES:
c1, o1, PLACED
c2, o1, PLACED
e1, c2, MANAGES, bidirectional
c1

EDGE_PROPS:
c2, o1, PLACED, channel, string
c9, o1, PLACED, channel, string

Let me know if you need anything else.
";

/// A response generated from two CSV files at once
pub const BATCH_OUTPUT: &str = "\
NODES:
s1, Student, Person
t1, Instructor, Person
c1, Course

EDGES:
s1, c1, ENROLLED_IN
t1, c1, TEACHES, bidirectional
";

pub fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
