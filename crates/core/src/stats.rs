//! Graph-level statistics and their text summary

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{DType, Graph, TensorRole};

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStatistics {
    pub total_tensors: usize,
    pub operator_nodes: usize,
    pub boundary_nodes: usize,
    pub total_edges: usize,
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub role_counts: BTreeMap<TensorRole, usize>,
    pub dtype_counts: BTreeMap<DType, usize>,
    pub op_name_counts: BTreeMap<String, usize>,
}

impl GraphStatistics {
    /// Collect statistics for `graph`
    pub fn collect(graph: &Graph) -> Self {
        let mut role_counts = BTreeMap::new();
        let mut dtype_counts = BTreeMap::new();
        for tensor in &graph.tensors {
            *role_counts.entry(tensor.role).or_insert(0) += 1;
            *dtype_counts.entry(tensor.dtype).or_insert(0) += 1;
        }

        let mut op_name_counts = BTreeMap::new();
        let mut operator_nodes = 0;
        for node in graph.operator_nodes() {
            operator_nodes += 1;
            *op_name_counts.entry(node.name.clone()).or_insert(0) += 1;
        }

        Self {
            total_tensors: graph.tensors.len(),
            operator_nodes,
            boundary_nodes: graph.nodes.len() - operator_nodes,
            total_edges: graph.edges.len(),
            num_inputs: graph.inputs.len(),
            num_outputs: graph.outputs.len(),
            role_counts,
            dtype_counts,
            op_name_counts,
        }
    }

    /// Total node count, operators and boundary nodes together
    pub fn total_nodes(&self) -> usize {
        self.operator_nodes + self.boundary_nodes
    }
}

impl Graph {
    /// Get graph statistics
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::collect(self)
    }
}

/// Sort a histogram by descending count, then by key
fn ranked<K: fmt::Display>(counts: &BTreeMap<K, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<_> = counts.iter().map(|(k, &v)| (k.to_string(), v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Statistics:")?;
        writeln!(f, "  Tensors:        {}", self.total_tensors)?;
        writeln!(f, "  Operator nodes: {}", self.operator_nodes)?;
        writeln!(f, "  Boundary nodes: {}", self.boundary_nodes)?;
        writeln!(f, "  Edges:          {}", self.total_edges)?;
        writeln!(f, "  Graph inputs:   {}", self.num_inputs)?;
        writeln!(f, "  Graph outputs:  {}", self.num_outputs)?;

        writeln!(f, "  Tensor roles:")?;
        for (role, count) in ranked(&self.role_counts) {
            writeln!(f, "    {}: {}", role, count)?;
        }

        writeln!(f, "  Tensor dtypes:")?;
        for (dtype, count) in ranked(&self.dtype_counts) {
            writeln!(f, "    {}: {}", dtype, count)?;
        }

        writeln!(f, "  Operation types:")?;
        for (name, count) in ranked(&self.op_name_counts) {
            writeln!(f, "    {}: {}", name, count)?;
        }

        Ok(())
    }
}
