//! Graph normalization: loosely-structured JSON in, consistent [`Graph`] out
//!
//! The pipeline runs in a fixed order:
//! 1. Decode the text and unwrap an optional `{ "graph": { ... } }` level
//! 2. Build the tensor table
//! 3. Build the operator-node table
//! 4. Synthesize boundary nodes for input, output and weight tensors
//! 5. Derive edges from producer/consumer relationships
//! 6. Resolve graph-level inputs and outputs
//!
//! Only a missing `tensors`/`nodes` array (or malformed JSON) fails. Every
//! other irregularity is normalized to a default.
//!
//! # Example
//!
//! ```
//! use graphlens_core::parse;
//!
//! let graph = parse(r#"{
//!     "tensors": [{ "id": "x", "name": "input" }, { "id": "y", "name": "output" }],
//!     "nodes": [{ "id": "relu", "name": "Relu", "inputs": [0], "outputs": [1] }]
//! }"#)?;
//!
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.edges.len(), 2);
//! assert_eq!(graph.inputs, vec![0]);
//! # Ok::<(), graphlens_core::GraphError>(())
//! ```

pub mod edges;
pub mod raw;
pub mod tables;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::model::{Graph, TensorRole, DEFAULT_GRAPH_ID};

pub use edges::{derive_edges, EdgeIdAllocator};
pub use raw::{RawGraph, RawNode, RawTensor};

/// Parse and normalize a graph document
pub fn parse(text: &str) -> Result<Graph> {
    GraphNormalizer::new().parse(text)
}

/// Normalize an already-decoded graph document
pub fn parse_value(value: &Value) -> Result<Graph> {
    GraphNormalizer::new().parse_value(value)
}

/// Converts source documents into normalized graphs
///
/// Holds no state between calls; every parse builds its own lookup tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphNormalizer;

impl GraphNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Parse JSON text into a normalized graph
    pub fn parse(&self, text: &str) -> Result<Graph> {
        let raw = RawGraph::decode(text)?;
        Ok(self.normalize(raw))
    }

    /// Normalize a decoded JSON value
    pub fn parse_value(&self, value: &Value) -> Result<Graph> {
        let raw = RawGraph::from_value(value)?;
        Ok(self.normalize(raw))
    }

    /// Normalize a leniently-decoded document
    pub fn normalize(&self, raw: RawGraph) -> Graph {
        let tensors = tables::build_tensor_table(&raw.tensors);
        let operators = tables::build_operator_nodes(&raw.nodes);
        let boundary = tables::synthesize_boundary_nodes(&tensors);
        debug!(
            "Built tables: {} tensors, {} operator nodes, {} boundary nodes",
            tensors.len(),
            operators.len(),
            boundary.len()
        );

        let edges = derive_edges(&tensors, &operators, &boundary);
        debug!("Derived {} edges", edges.len());

        let inputs = tables::resolve_graph_io(raw.inputs.as_deref(), &tensors, TensorRole::Input);
        let outputs = tables::resolve_graph_io(raw.outputs.as_deref(), &tensors, TensorRole::Output);

        let id = raw.id.clone().unwrap_or_else(|| DEFAULT_GRAPH_ID.to_string());
        let name = raw
            .name
            .or(raw.id)
            .unwrap_or_else(|| DEFAULT_GRAPH_ID.to_string());

        let mut nodes = operators;
        nodes.extend(boundary);

        Graph {
            id,
            name,
            tensors,
            nodes,
            edges,
            inputs,
            outputs,
            metadata: raw.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_required_field_failure() {
        let err = parse(r#"{"foo": 1}"#).unwrap_err();
        assert!(matches!(err, GraphError::Format));
        assert_eq!(err.to_string(), "Invalid graph: missing tensors or nodes");
    }

    #[test]
    fn test_nested_graph_defaults() {
        let graph = parse(r#"{"graph": {"tensors": [], "nodes": []}}"#).unwrap();
        assert_eq!(graph.id, "graph");
        assert_eq!(graph.name, "graph");
        assert!(graph.tensors.is_empty());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert!(graph.metadata.is_none());
    }

    #[test]
    fn test_name_falls_back_to_id() {
        let graph = parse(r#"{"id": "resnet", "tensors": [], "nodes": []}"#).unwrap();
        assert_eq!(graph.id, "resnet");
        assert_eq!(graph.name, "resnet");

        let graph = parse(r#"{"name": "ResNet", "tensors": [], "nodes": []}"#).unwrap();
        assert_eq!(graph.id, "graph");
        assert_eq!(graph.name, "ResNet");
    }

    #[test]
    fn test_boundary_nodes_follow_operators() {
        let graph = parse(
            r#"{
                "tensors": [{"name": "weight"}, {}, {"name": "input"}],
                "nodes": [{"id": "a", "inputs": [2, 0], "outputs": [1]}]
            }"#,
        )
        .unwrap();

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "tensor_0", "tensor_2"]);
        assert!(!graph.nodes[0].is_tensor_node());
        assert!(graph.nodes[1].is_tensor_node());
        assert_eq!(graph.inputs, vec![2]);
    }

    #[test]
    fn test_parse_value_matches_parse() {
        let text = r#"{"tensors": [{"id": "t"}], "nodes": [{"id": "n", "outputs": [0]}]}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parse(text).unwrap(), parse_value(&value).unwrap());
    }
}
