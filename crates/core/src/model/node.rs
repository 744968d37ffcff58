//! Operator nodes and synthesized boundary tensor-nodes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Metadata, Tensor, TensorRole};

/// Metadata key marking a synthesized boundary node
pub const IS_TENSOR_NODE_KEY: &str = "isTensorNode";

/// Metadata key holding the tensor index a boundary node represents
pub const TENSOR_INDEX_KEY: &str = "tensorIndex";

/// Name given to operator nodes with neither a name nor an id
pub const UNKNOWN_NODE_NAME: &str = "Unknown";

/// A node in the normalized graph
///
/// Operator nodes come straight from the source document. Boundary nodes are
/// synthesized for input, output and weight tensors and carry
/// `{ "isTensorNode": true, "tensorIndex": <index> }` in their metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Source id, or the tensor id for boundary nodes
    pub id: String,

    /// Display/type label
    pub name: String,

    /// Consumed tensor indices
    #[serde(default)]
    pub inputs: Vec<usize>,

    /// Produced tensor indices
    #[serde(default)]
    pub outputs: Vec<usize>,

    /// Operator attributes (shallow copy of the source object)
    #[serde(default)]
    pub attributes: Metadata,

    /// Free-form metadata, omitted when the source carried none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Node {
    /// Synthesize the boundary node for the tensor at `index`
    ///
    /// Input and weight nodes output their tensor. Output nodes list nothing;
    /// their incoming edges come from the producers during edge derivation.
    pub fn boundary(tensor: &Tensor, index: usize) -> Self {
        let outputs = match tensor.role {
            TensorRole::Input | TensorRole::Weight => vec![index],
            TensorRole::Output | TensorRole::Activation => Vec::new(),
        };

        let mut metadata = Metadata::new();
        metadata.insert(IS_TENSOR_NODE_KEY.to_string(), Value::Bool(true));
        metadata.insert(TENSOR_INDEX_KEY.to_string(), Value::from(index));

        Self {
            id: tensor.id.clone(),
            name: tensor.role.label().to_string(),
            inputs: Vec::new(),
            outputs,
            attributes: Metadata::new(),
            metadata: Some(metadata),
        }
    }

    /// Whether the metadata marks this as a boundary tensor-node
    pub fn is_tensor_node(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(IS_TENSOR_NODE_KEY))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Tensor index a boundary node represents
    pub fn tensor_index(&self) -> Option<usize> {
        if !self.is_tensor_node() {
            return None;
        }
        self.metadata
            .as_ref()
            .and_then(|m| m.get(TENSOR_INDEX_KEY))
            .and_then(Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
    }

    /// Get attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}
