//! The normalized graph and its lookup queries

use serde::{Deserialize, Serialize};

use super::{Edge, Metadata, Node, Tensor};

/// Default id and name of a graph whose source provides neither
pub const DEFAULT_GRAPH_ID: &str = "graph";

/// Normalized computation graph
///
/// `nodes` holds every operator node first, followed by the synthesized
/// boundary nodes in tensor-table order. Tensor indices anywhere in the graph
/// refer to positions in `tensors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub id: String,
    pub name: String,
    pub tensors: Vec<Tensor>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub inputs: Vec<usize>,
    pub outputs: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Graph {
    /// Create an empty graph with the default id and name
    pub fn empty() -> Self {
        Self {
            id: DEFAULT_GRAPH_ID.to_string(),
            name: DEFAULT_GRAPH_ID.to_string(),
            tensors: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            metadata: None,
        }
    }

    /// Tensor at `index`, `None` when out of range
    pub fn tensor(&self, index: usize) -> Option<&Tensor> {
        self.tensors.get(index)
    }

    /// First node carrying `id`
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Operator nodes, in source order
    pub fn operator_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| !node.is_tensor_node())
    }

    /// Synthesized boundary nodes, in tensor-table order
    pub fn boundary_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_tensor_node())
    }

    /// Tensor a boundary node represents
    pub fn node_tensor(&self, node: &Node) -> Option<&Tensor> {
        node.tensor_index().and_then(|index| self.tensor(index))
    }

    /// Operator nodes listing `index` among their outputs
    pub fn producers_of(&self, index: usize) -> Vec<&Node> {
        self.operator_nodes()
            .filter(|node| node.outputs.contains(&index))
            .collect()
    }

    /// Operator nodes listing `index` among their inputs
    pub fn consumers_of(&self, index: usize) -> Vec<&Node> {
        self.operator_nodes()
            .filter(|node| node.inputs.contains(&index))
            .collect()
    }

    /// Graph-level input tensors, skipping out-of-range indices
    pub fn input_tensors(&self) -> Vec<&Tensor> {
        self.inputs.iter().filter_map(|&i| self.tensor(i)).collect()
    }

    /// Graph-level output tensors, skipping out-of-range indices
    pub fn output_tensors(&self) -> Vec<&Tensor> {
        self.outputs.iter().filter_map(|&i| self.tensor(i)).collect()
    }

    /// Edges leaving the node with `id`
    pub fn outgoing_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.source == id)
    }

    /// Edges entering the node with `id`
    pub fn incoming_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.target == id)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}
