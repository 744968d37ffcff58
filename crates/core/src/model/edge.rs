//! Derived edges between producer and consumer nodes

use serde::{Deserialize, Serialize};

use super::{DType, Tensor};

/// Tensor properties copied onto an edge when it is derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub shape: Vec<i64>,
    pub dtype: DType,
}

impl From<&Tensor> for EdgeData {
    fn from(tensor: &Tensor) -> Self {
        Self {
            shape: tensor.shape.clone(),
            dtype: tensor.dtype,
        }
    }
}

/// Directed link carrying one tensor from a producing node to a consuming node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique within the graph; the tensor id unless already taken
    pub id: String,
    /// Producing node id
    pub source: String,
    /// Consuming node id
    pub target: String,
    pub data: EdgeData,
}
