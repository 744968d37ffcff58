//! Tensor table entries and their closed classifications

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Metadata;

/// Purpose of a tensor within the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TensorRole {
    /// Fed into the graph from outside
    Input,
    /// Produced by the graph for the outside
    Output,
    /// Learned parameter
    Weight,
    /// Intermediate value, only ever drawn as an edge
    #[default]
    Activation,
}

impl TensorRole {
    /// All roles in declaration order
    pub const ALL: [TensorRole; 4] = [
        TensorRole::Input,
        TensorRole::Output,
        TensorRole::Weight,
        TensorRole::Activation,
    ];

    /// Match a source string against the role set, ignoring case
    pub fn resolve(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "input" => Some(TensorRole::Input),
            "output" => Some(TensorRole::Output),
            "weight" => Some(TensorRole::Weight),
            "activation" => Some(TensorRole::Activation),
            _ => None,
        }
    }

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            TensorRole::Input => "input",
            TensorRole::Output => "output",
            TensorRole::Weight => "weight",
            TensorRole::Activation => "activation",
        }
    }

    /// Capitalized display label, used as the name of boundary nodes
    pub fn label(self) -> &'static str {
        match self {
            TensorRole::Input => "Input",
            TensorRole::Output => "Output",
            TensorRole::Weight => "Weight",
            TensorRole::Activation => "Activation",
        }
    }

    /// Whether tensors of this role are drawn as standalone nodes
    pub fn has_boundary_node(self) -> bool {
        !matches!(self, TensorRole::Activation)
    }
}

impl fmt::Display for TensorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element type of a tensor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    #[default]
    Float32,
    Float16,
    Int32,
    Int64,
    Uint8,
    Bool,
    String,
}

impl DType {
    /// All element types in declaration order
    pub const ALL: [DType; 7] = [
        DType::Float32,
        DType::Float16,
        DType::Int32,
        DType::Int64,
        DType::Uint8,
        DType::Bool,
        DType::String,
    ];

    /// Match a source string against the dtype set, ignoring case
    pub fn resolve(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "float32" => Some(DType::Float32),
            "float16" => Some(DType::Float16),
            "int32" => Some(DType::Int32),
            "int64" => Some(DType::Int64),
            "uint8" => Some(DType::Uint8),
            "bool" => Some(DType::Bool),
            "string" => Some(DType::String),
            _ => None,
        }
    }

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float16 => "float16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Uint8 => "uint8",
            DType::Bool => "bool",
            DType::String => "string",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data-flow value in the graph
///
/// A tensor's position in [`Graph::tensors`](super::Graph::tensors) is its
/// identity; `id` is only a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    /// Trimmed label, `tensor_<index>` when the source had none
    pub id: String,

    /// Role classification (serialized as `name`)
    #[serde(rename = "name")]
    pub role: TensorRole,

    /// Dimension sizes
    #[serde(default)]
    pub shape: Vec<i64>,

    /// Element type
    #[serde(default)]
    pub dtype: DType,

    /// Free-form metadata, absent when the source carried none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Tensor {
    /// Number of elements, `None` for unknown (negative) dimensions
    pub fn element_count(&self) -> Option<u64> {
        self.shape.iter().try_fold(1u64, |acc, &dim| {
            u64::try_from(dim).ok().and_then(|d| acc.checked_mul(d))
        })
    }
}
