//! Dependency view over a normalized graph, backed by petgraph
//!
//! Layout engines and table views often need ordering or reachability on top
//! of the flat node/edge lists. [`DependencyGraph`] builds a `DiGraph` once
//! and answers those queries in terms of node ids.

use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Reversed};
use petgraph::Direction;
use rustc_hash::FxHashMap;

use crate::error::AnalysisError;
use crate::model::Graph;

/// Directed node/edge view of a [`Graph`]
///
/// Node weights are positions in `Graph::nodes`, edge weights positions in
/// `Graph::edges`. When several nodes share an id, edges attach to the first.
pub struct DependencyGraph<'g> {
    source: &'g Graph,
    graph: DiGraph<usize, usize>,
    by_id: FxHashMap<&'g str, NodeIndex>,
}

impl<'g> DependencyGraph<'g> {
    /// Build the view; edges whose endpoints match no node are left out
    pub fn new(source: &'g Graph) -> Self {
        let mut graph = DiGraph::with_capacity(source.nodes.len(), source.edges.len());
        let mut by_id: FxHashMap<&'g str, NodeIndex> = FxHashMap::default();

        for (position, node) in source.nodes.iter().enumerate() {
            let index = graph.add_node(position);
            by_id.entry(node.id.as_str()).or_insert(index);
        }

        for (position, edge) in source.edges.iter().enumerate() {
            if let (Some(&from), Some(&to)) =
                (by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str()))
            {
                graph.add_edge(from, to, position);
            }
        }

        Self {
            source,
            graph,
            by_id,
        }
    }

    /// Number of nodes in the view
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the view
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the edges contain a cycle
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Node ids in dependency order
    pub fn topological_order(&self) -> Result<Vec<&'g str>, AnalysisError> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|ix| self.id_of(ix)).collect())
            .map_err(|cycle| AnalysisError::Cycle {
                node: self.id_of(cycle.node_id()).to_string(),
            })
    }

    /// Nodes without incoming edges
    pub fn roots(&self) -> Vec<&'g str> {
        self.graph
            .externals(Direction::Incoming)
            .map(|ix| self.id_of(ix))
            .collect()
    }

    /// Nodes without outgoing edges
    pub fn leaves(&self) -> Vec<&'g str> {
        self.graph
            .externals(Direction::Outgoing)
            .map(|ix| self.id_of(ix))
            .collect()
    }

    /// Nodes reachable along edges from `id`, in breadth-first order
    pub fn downstream_from(&self, id: &str) -> Result<Vec<&'g str>, AnalysisError> {
        let start = self.lookup(id)?;
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = Vec::new();
        while let Some(ix) = bfs.next(&self.graph) {
            if ix != start {
                reached.push(self.id_of(ix));
            }
        }
        Ok(reached)
    }

    /// Nodes that reach `id` along edges, in breadth-first order
    pub fn upstream_of(&self, id: &str) -> Result<Vec<&'g str>, AnalysisError> {
        let start = self.lookup(id)?;
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut reached = Vec::new();
        while let Some(ix) = bfs.next(reversed) {
            if ix != start {
                reached.push(self.id_of(ix));
            }
        }
        Ok(reached)
    }

    fn lookup(&self, id: &str) -> Result<NodeIndex, AnalysisError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| AnalysisError::NodeNotFound(id.to_string()))
    }

    fn id_of(&self, ix: NodeIndex) -> &'g str {
        self.source.nodes[self.graph[ix]].id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn chain() -> Graph {
        parse(
            r#"{
                "tensors": [
                    {"id": "x", "name": "input"},
                    {"id": "h"},
                    {"id": "y", "name": "output"}
                ],
                "nodes": [
                    {"id": "relu", "inputs": [1], "outputs": [2]},
                    {"id": "conv", "inputs": [0], "outputs": [1]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_topological_order() {
        let graph = chain();
        let deps = DependencyGraph::new(&graph);
        assert_eq!(deps.node_count(), 4);
        assert_eq!(deps.edge_count(), 3);
        assert!(!deps.is_cyclic());

        let order = deps.topological_order().unwrap();
        let pos = |id: &str| order.iter().position(|n| *n == id).unwrap();
        assert!(pos("x") < pos("conv"));
        assert!(pos("conv") < pos("relu"));
        assert!(pos("relu") < pos("y"));
    }

    #[test]
    fn test_reachability() {
        let graph = chain();
        let deps = DependencyGraph::new(&graph);
        assert_eq!(deps.downstream_from("conv").unwrap(), vec!["relu", "y"]);
        assert_eq!(deps.upstream_of("relu").unwrap(), vec!["conv", "x"]);
        assert_eq!(deps.roots(), vec!["x"]);
        assert_eq!(deps.leaves(), vec!["y"]);
    }

    #[test]
    fn test_unknown_node() {
        let graph = chain();
        let deps = DependencyGraph::new(&graph);
        assert_eq!(
            deps.downstream_from("missing").unwrap_err(),
            AnalysisError::NodeNotFound("missing".to_string())
        );
    }

    #[test]
    fn test_cycle_detected() {
        let graph = parse(
            r#"{
                "tensors": [{"id": "a"}, {"id": "b"}],
                "nodes": [
                    {"id": "f", "inputs": [1], "outputs": [0]},
                    {"id": "g", "inputs": [0], "outputs": [1]}
                ]
            }"#,
        )
        .unwrap();
        let deps = DependencyGraph::new(&graph);
        assert!(deps.is_cyclic());
        assert!(matches!(
            deps.topological_order(),
            Err(AnalysisError::Cycle { .. })
        ));
    }
}
