//! Edge derivation from tensor producer/consumer relationships

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

use crate::model::{Edge, EdgeData, Node, Tensor, TensorRole};

/// Hands out edge ids, unique within one derivation
///
/// The first edge for a tensor keeps the bare tensor id. Later ones get
/// `<tensor>_<source>_<target>`, with a numeric suffix if even that is taken.
#[derive(Debug, Default)]
pub struct EdgeIdAllocator {
    seen: FxHashSet<String>,
}

impl EdgeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for an edge carrying `tensor_id` from `source` to `target`
    pub fn allocate(&mut self, tensor_id: &str, source: &str, target: &str) -> String {
        if self.seen.insert(tensor_id.to_string()) {
            return tensor_id.to_string();
        }

        let base = format!("{tensor_id}_{source}_{target}");
        let mut candidate = base.clone();
        let mut attempt = 2usize;
        while !self.seen.insert(candidate.clone()) {
            candidate = format!("{base}_{attempt}");
            attempt += 1;
        }
        candidate
    }
}

/// Derive every edge of the graph
///
/// `operators` and `boundary` are the two halves of the node list. Only
/// operators produce or consume tensors here; boundary nodes stand in as the
/// source of their tensor, and output boundary nodes receive an edge from each
/// producer of their tensor.
pub fn derive_edges(tensors: &[Tensor], operators: &[Node], boundary: &[Node]) -> Vec<Edge> {
    // tensor index -> producing operator ids
    let mut producers: FxHashMap<usize, Vec<&str>> = FxHashMap::default();
    for node in operators {
        for &index in &node.outputs {
            producers.entry(index).or_default().push(node.id.as_str());
        }
    }

    // tensor index -> boundary node id
    let boundary_ids: FxHashMap<usize, &str> = boundary
        .iter()
        .filter_map(|node| node.tensor_index().map(|index| (index, node.id.as_str())))
        .collect();

    let mut ids = EdgeIdAllocator::new();
    let mut edges = Vec::new();

    for consumer in operators {
        for &index in &consumer.inputs {
            let Some(tensor) = tensors.get(index) else {
                warn!(
                    "Node '{}' consumes tensor index {} which is out of range ({} tensors)",
                    consumer.id,
                    index,
                    tensors.len()
                );
                continue;
            };

            let sources: &[&str] = match boundary_ids.get(&index) {
                Some(id) => std::slice::from_ref(id),
                None => producers.get(&index).map(Vec::as_slice).unwrap_or(&[]),
            };

            for &source in sources {
                if source == consumer.id {
                    trace!("Skipping self-loop on '{}' for tensor '{}'", source, tensor.id);
                    continue;
                }
                edges.push(make_edge(&mut ids, tensor, source, &consumer.id));
            }
        }
    }

    for node in boundary {
        let Some(index) = node.tensor_index() else {
            continue;
        };
        let Some(tensor) = tensors.get(index) else {
            continue;
        };
        if tensor.role != TensorRole::Output {
            continue;
        }

        for &source in producers.get(&index).map(Vec::as_slice).unwrap_or(&[]) {
            edges.push(make_edge(&mut ids, tensor, source, &node.id));
        }
    }

    edges
}

fn make_edge(ids: &mut EdgeIdAllocator, tensor: &Tensor, source: &str, target: &str) -> Edge {
    let id = ids.allocate(&tensor.id, source, target);
    trace!("Edge '{}': {} -> {}", id, source, target);
    Edge {
        id,
        source: source.to_string(),
        target: target.to_string(),
        data: EdgeData::from(tensor),
    }
}
