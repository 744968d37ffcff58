//! Tensor and node table construction

use crate::model::{DType, Metadata, Node, Tensor, TensorRole, UNKNOWN_NODE_NAME};

use super::raw::{RawNode, RawTensor};

/// Build the tensor table, one entry per source tensor, by index
pub fn build_tensor_table(raw: &[RawTensor]) -> Vec<Tensor> {
    raw.iter()
        .enumerate()
        .map(|(index, tensor)| normalize_tensor(index, tensor))
        .collect()
}

fn normalize_tensor(index: usize, raw: &RawTensor) -> Tensor {
    let id = match raw.id.as_deref() {
        Some(id) => id.trim().to_string(),
        None => format!("tensor_{index}"),
    };

    Tensor {
        id,
        role: resolve_role(raw),
        shape: raw.shape.clone(),
        dtype: raw
            .dtype
            .as_deref()
            .and_then(DType::resolve)
            .unwrap_or_default(),
        metadata: raw.metadata.clone(),
    }
}

/// `name` wins over `role` when both resolve; an unrecognized `name` falls
/// through to `role` before defaulting to activation.
fn resolve_role(raw: &RawTensor) -> TensorRole {
    [raw.name.as_deref(), raw.role.as_deref()]
        .into_iter()
        .flatten()
        .find_map(TensorRole::resolve)
        .unwrap_or_default()
}

/// Build the operator-node table in source order
pub fn build_operator_nodes(raw: &[RawNode]) -> Vec<Node> {
    raw.iter().map(normalize_node).collect()
}

fn normalize_node(raw: &RawNode) -> Node {
    let id = raw.id.clone().unwrap_or_default();
    let name = [raw.name.as_deref(), raw.id.as_deref()]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(UNKNOWN_NODE_NAME)
        .to_string();

    Node {
        id,
        name,
        inputs: raw.inputs.clone(),
        outputs: raw.outputs.clone(),
        attributes: raw.attributes.clone().unwrap_or_else(Metadata::new),
        metadata: raw.metadata.clone(),
    }
}

/// Boundary nodes for every input, output and weight tensor, in table order
pub fn synthesize_boundary_nodes(tensors: &[Tensor]) -> Vec<Node> {
    tensors
        .iter()
        .enumerate()
        .filter(|(_, tensor)| tensor.role.has_boundary_node())
        .map(|(index, tensor)| Node::boundary(tensor, index))
        .collect()
}

/// Explicit graph-level indices when declared, else every tensor with `role`
pub fn resolve_graph_io(
    explicit: Option<&[usize]>,
    tensors: &[Tensor],
    role: TensorRole,
) -> Vec<usize> {
    if let Some(explicit) = explicit {
        return explicit.to_vec();
    }

    tensors
        .iter()
        .enumerate()
        .filter(|(_, tensor)| tensor.role == role)
        .map(|(index, _)| index)
        .collect()
}
