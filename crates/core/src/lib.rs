//! # graphlens-core
//!
//! Parsing and normalization of computation-graph documents.
//!
//! A source document lists tensors and operator nodes in loosely-typed JSON.
//! [`parse`] turns it into a [`Graph`] in which every field has a definite
//! value, input/output/weight tensors have their own boundary nodes, and the
//! edges between nodes are derived from which operators produce and consume
//! each tensor.
//!
//! ## Usage
//!
//! ```
//! use graphlens_core::{parse, DependencyGraph, TensorRole};
//!
//! let graph = parse(r#"{
//!     "graph": {
//!         "id": "mlp",
//!         "tensors": [
//!             { "id": "x", "name": "input", "shape": [1, 4] },
//!             { "id": "w", "name": "weight", "shape": [4, 2] },
//!             { "id": "y", "name": "output", "shape": [1, 2] }
//!         ],
//!         "nodes": [
//!             { "id": "fc", "name": "MatMul", "inputs": [0, 1], "outputs": [2] }
//!         ]
//!     }
//! }"#)?;
//!
//! assert_eq!(graph.id, "mlp");
//! assert_eq!(graph.tensor(2).map(|t| t.role), Some(TensorRole::Output));
//!
//! let order = DependencyGraph::new(&graph).topological_order().unwrap();
//! assert_eq!(order.last(), Some(&"y"));
//! # Ok::<(), graphlens_core::GraphError>(())
//! ```
//!
//! ## Modules
//!
//! - [`parse`](mod@parse): the normalizer
//! - [`model`]: tensors, nodes, edges and the graph aggregate
//! - [`rows`]: flatten operator nodes into table rows
//! - [`analysis`]: topological order and reachability
//! - [`stats`]: counts and histograms

pub mod analysis;
pub mod error;
pub mod model;
pub mod parse;
pub mod rows;
pub mod stats;

pub use analysis::DependencyGraph;
pub use error::{AnalysisError, GraphError, Result};
pub use model::{DType, Edge, EdgeData, Graph, Metadata, Node, Tensor, TensorRole};
pub use parse::{parse, parse_value, GraphNormalizer};
pub use rows::{flatten_rows, Row, RowTable};
pub use stats::GraphStatistics;
