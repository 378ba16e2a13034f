//! Serialization tests against the external JSON contract

use serde_json::{json, Value};

/// Contract fixture: Node as emitted to query/template generators
fn contract_node_fixture() -> Value {
    json!({
        "id": "c1",
        "label": "Customer",
        "properties": {
            "name": "string",
            "age": "int"
        },
        "type": "Person"
    })
}

/// Contract fixture: Edge as emitted to query/template generators
fn contract_edge_fixture() -> Value {
    json!({
        "source": "c1",
        "target": "o1",
        "label": "PLACED",
        "properties": {
            "placed_at": "datetime"
        },
        "direction": "outgoing"
    })
}

/// Contract fixture: Graph with provenance headers
fn contract_graph_fixture() -> Value {
    json!({
        "nodes": [
            { "id": "c1", "label": "Customer", "type": "Person" },
            { "id": "o1", "label": "Order" }
        ],
        "edges": [
            { "source": "c1", "target": "o1", "label": "PLACED", "direction": "outgoing" }
        ],
        "csvHeaders": ["customer_id", "order_id"]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{Direction, Edge, Graph, GraphError, Node, PropertyValue};

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Bidirectional).unwrap();
        assert_eq!(json, "\"bidirectional\"");

        let dir: Direction = serde_json::from_str("\"incoming\"").unwrap();
        assert_eq!(dir, Direction::Incoming);
    }

    #[test]
    fn node_optional_fields_skipped_when_empty() {
        let node = Node::new("o1", "Order");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["id"], "o1");
        assert_eq!(json["label"], "Order");
        assert!(json.get("type").is_none());
        assert!(json.get("properties").is_none());
    }

    #[test]
    fn edge_optional_fields_skipped_when_empty() {
        let edge = Edge::new("c1", "o1", "PLACED");
        let json = serde_json::to_value(&edge).unwrap();

        assert!(json.get("direction").is_none());
        assert!(json.get("properties").is_none());
    }

    #[test]
    fn graph_uses_camel_case_headers_field() {
        let graph = Graph::new().with_csv_headers(["a", "b"]);
        let json = serde_json::to_value(&graph).unwrap();

        assert_eq!(json["csvHeaders"], json!(["a", "b"]));
        assert!(json.get("csv_headers").is_none());
        assert!(json["nodes"].is_array());
        assert!(json["edges"].is_array());
    }

    #[test]
    fn can_deserialize_contract_node_fixture() {
        let result: Result<Node, _> = serde_json::from_value(contract_node_fixture());
        assert!(result.is_ok(), "Failed to deserialize contract node fixture: {:?}", result.err());

        let node = result.unwrap();
        assert_eq!(node.id, "c1");
        assert_eq!(node.node_type, "Person");
        assert_eq!(node.props.get("age"), Some(&PropertyValue::from("int")));
    }

    #[test]
    fn can_deserialize_contract_edge_fixture() {
        let result: Result<Edge, _> = serde_json::from_value(contract_edge_fixture());
        assert!(result.is_ok(), "Failed to deserialize contract edge fixture: {:?}", result.err());

        let edge = result.unwrap();
        assert_eq!(edge.key().to_string(), "c1|o1|PLACED");
        assert_eq!(edge.direction, Some(Direction::Outgoing));
        assert_eq!(edge.props.len(), 1);
    }

    #[test]
    fn can_deserialize_contract_graph_fixture() {
        let graph = Graph::from_json(&contract_graph_fixture().to_string()).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.csv_headers, vec!["customer_id", "order_id"]);
    }

    #[test]
    fn non_string_property_values_deserialize() {
        let json = json!({
            "id": "n1",
            "label": "Sensor",
            "properties": { "count": 3, "ratio": 0.5, "active": true, "tags": ["a"] }
        });
        let node: Node = serde_json::from_value(json).unwrap();

        assert_eq!(node.props["count"], PropertyValue::Int(3));
        assert_eq!(node.props["ratio"], PropertyValue::Float(0.5));
        assert_eq!(node.props["active"], PropertyValue::Bool(true));
        assert!(matches!(node.props["tags"], PropertyValue::Array(_)));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let graph = Graph::from_json("{}").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn null_collections_read_as_empty() {
        let json = json!({
            "nodes": [
                { "id": "c1", "label": "Customer", "properties": null, "type": "Person" }
            ],
            "edges": [
                { "source": "c1", "target": "o1", "label": "PLACED", "properties": null, "direction": null }
            ],
            "csvHeaders": null
        });
        let graph = Graph::from_json(&json.to_string()).unwrap();

        assert!(graph.nodes[0].props.is_empty());
        assert!(graph.edges[0].props.is_empty());
        assert_eq!(graph.edges[0].direction, None);
        assert!(graph.csv_headers.is_empty());

        let reencoded = serde_json::to_value(&graph).unwrap();
        assert_eq!(reencoded["csvHeaders"], json!([]));
    }

    #[test]
    fn null_node_and_edge_lists_read_as_empty() {
        let graph = Graph::from_json(r#"{"nodes":null,"edges":null,"csvHeaders":["a"]}"#).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.csv_headers, vec!["a"]);
    }

    #[test]
    fn graph_roundtrip() {
        let graph = Graph::new()
            .with_node(Node::new("c1", "Customer").with_type("Person").with_property("name", "string"))
            .with_edge(Edge::new("c1", "o1", "PLACED").with_direction(Direction::Outgoing))
            .with_csv_headers(["customer_id"]);

        let json = graph.to_json().unwrap();
        let graph2 = Graph::from_json(&json).unwrap();

        assert_eq!(graph, graph2);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = Graph::from_json("{\"nodes\": [").unwrap_err();
        assert!(matches!(err, GraphError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn unknown_direction_is_a_serialization_error() {
        let json = json!({ "source": "a", "target": "b", "label": "R", "direction": "sideways" });
        let result: Result<Edge, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
