//! Normalized graph model
//!
//! Tensors live in a flat table and are referenced everywhere by position.
//! Nodes and edges refer to each other by string id, which is what layout and
//! rendering collaborators key on.

pub mod edge;
pub mod graph;
pub mod node;
pub mod tensor;

pub use edge::{Edge, EdgeData};
pub use graph::{Graph, DEFAULT_GRAPH_ID};
pub use node::{Node, IS_TENSOR_NODE_KEY, TENSOR_INDEX_KEY, UNKNOWN_NODE_NAME};
pub use tensor::{DType, Tensor, TensorRole};

/// Free-form key/value mapping carried by tensors, nodes and graphs
pub type Metadata = serde_json::Map<String, serde_json::Value>;
