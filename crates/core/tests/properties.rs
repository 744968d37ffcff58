//! Property tests over randomly generated graph documents

use graphlens_core::{parse, TensorRole};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;

fn role_name() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("input")),
        Just(Some("OUTPUT")),
        Just(Some("weight")),
        Just(Some("activation")),
        Just(Some("bogus")),
    ]
}

fn tensor_entry() -> impl Strategy<Value = Value> {
    (role_name(), prop::option::of("[a-c]{1,2}"), prop::collection::vec(0i64..8, 0..3)).prop_map(
        |(role, id, shape)| {
            let mut entry = json!({ "shape": shape });
            if let Some(role) = role {
                entry["name"] = json!(role);
            }
            if let Some(id) = id {
                entry["id"] = json!(id);
            }
            entry
        },
    )
}

fn node_entry(max_index: usize) -> impl Strategy<Value = Value> {
    (
        prop::option::of("n[0-3]"),
        prop::collection::vec(0..max_index + 2, 0..3),
        prop::collection::vec(0..max_index + 2, 0..2),
    )
        .prop_map(|(id, inputs, outputs)| {
            let mut entry = json!({ "inputs": inputs, "outputs": outputs });
            if let Some(id) = id {
                entry["id"] = json!(id);
            }
            entry
        })
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::vec(tensor_entry(), 0..6).prop_flat_map(|tensors| {
        let count = tensors.len();
        prop::collection::vec(node_entry(count), 0..6)
            .prop_map(move |nodes| json!({ "tensors": tensors.clone(), "nodes": nodes }))
    })
}

proptest! {
    #[test]
    fn prop_parse_is_deterministic(doc in document()) {
        let text = doc.to_string();
        let first = parse(&text).unwrap();
        let second = parse(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_edge_ids_unique(doc in document()) {
        let graph = parse(&doc.to_string()).unwrap();
        let ids: HashSet<_> = graph.edges.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(ids.len(), graph.edges.len());
    }

    #[test]
    fn prop_edges_connect_known_nodes(doc in document()) {
        let graph = parse(&doc.to_string()).unwrap();
        let node_ids: HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            prop_assert!(node_ids.contains(edge.source.as_str()));
            prop_assert!(node_ids.contains(edge.target.as_str()));
        }
    }

    #[test]
    fn prop_one_boundary_node_per_non_activation(doc in document()) {
        let graph = parse(&doc.to_string()).unwrap();
        let expected: Vec<usize> = graph
            .tensors
            .iter()
            .enumerate()
            .filter(|(_, t)| t.role != TensorRole::Activation)
            .map(|(i, _)| i)
            .collect();
        let actual: Vec<usize> = graph.boundary_nodes().filter_map(|n| n.tensor_index()).collect();
        prop_assert_eq!(actual, expected);

        let operator_count = doc["nodes"].as_array().map(Vec::len).unwrap_or(0);
        prop_assert!(graph.nodes[..operator_count].iter().all(|n| !n.is_tensor_node()));
    }

    #[test]
    fn prop_inferred_io_matches_roles(doc in document()) {
        let graph = parse(&doc.to_string()).unwrap();
        for &i in &graph.inputs {
            prop_assert_eq!(graph.tensors[i].role, TensorRole::Input);
        }
        for &i in &graph.outputs {
            prop_assert_eq!(graph.tensors[i].role, TensorRole::Output);
        }
    }
}
