//! Lenient decode of a source document into typed optional fields
//!
//! The source format is loosely structured: any field may be missing or of
//! the wrong type. This pass reads each field once, keeping values of the
//! expected type and dropping everything else, so normalization only deals
//! with `Option`s and filtered lists.

use serde_json::{Map, Value};

use crate::error::{GraphError, Result};
use crate::model::Metadata;

/// Graph document after the lenient decode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGraph {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tensors: Vec<RawTensor>,
    pub nodes: Vec<RawNode>,
    /// `Some` when the source declared at least one numeric entry
    pub inputs: Option<Vec<usize>>,
    pub outputs: Option<Vec<usize>>,
    pub metadata: Option<Metadata>,
}

/// Tensor entry after the lenient decode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTensor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub shape: Vec<i64>,
    pub dtype: Option<String>,
    pub metadata: Option<Metadata>,
}

/// Node entry after the lenient decode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub inputs: Vec<usize>,
    pub outputs: Vec<usize>,
    pub attributes: Option<Metadata>,
    pub metadata: Option<Metadata>,
}

impl RawGraph {
    /// Decode JSON text
    pub fn decode(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decode an already-parsed document
    ///
    /// A `graph` property holding an object replaces the root. The root must
    /// then carry `tensors` and `nodes` arrays.
    pub fn from_value(value: &Value) -> Result<Self> {
        let outer = value.as_object().ok_or(GraphError::Format)?;
        let root = match outer.get("graph") {
            Some(Value::Object(inner)) => inner,
            _ => outer,
        };

        let tensors = root
            .get("tensors")
            .and_then(Value::as_array)
            .ok_or(GraphError::Format)?;
        let nodes = root
            .get("nodes")
            .and_then(Value::as_array)
            .ok_or(GraphError::Format)?;

        Ok(Self {
            id: text_field(root, "id"),
            name: text_field(root, "name"),
            tensors: tensors.iter().map(RawTensor::from_value).collect(),
            nodes: nodes.iter().map(RawNode::from_value).collect(),
            inputs: declared_index_list(root.get("inputs")),
            outputs: declared_index_list(root.get("outputs")),
            metadata: non_empty_object(root.get("metadata")),
        })
    }
}

impl RawTensor {
    /// Decode one tensor entry; non-object entries decode as all-default
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            id: text_field(obj, "id"),
            name: text_field(obj, "name"),
            role: text_field(obj, "role"),
            shape: dimension_list(obj.get("shape")),
            dtype: text_field(obj, "dtype"),
            metadata: non_empty_object(obj.get("metadata")),
        }
    }
}

impl RawNode {
    /// Decode one node entry; non-object entries decode as all-default
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            id: text_field(obj, "id"),
            name: text_field(obj, "name"),
            inputs: index_list(obj.get("inputs")),
            outputs: index_list(obj.get("outputs")),
            attributes: obj.get("attributes").and_then(Value::as_object).cloned(),
            metadata: non_empty_object(obj.get("metadata")),
        }
    }
}

/// String field, with numbers accepted in their JSON spelling
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Object field, only when it has at least one key
fn non_empty_object(value: Option<&Value>) -> Option<Metadata> {
    value
        .and_then(Value::as_object)
        .filter(|obj| !obj.is_empty())
        .cloned()
}

/// Integral value of a JSON number, including floats such as `3.0`
fn integral(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Numeric entries of an array usable as tensor indices
fn index_list(value: Option<&Value>) -> Vec<usize> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(integral)
                .filter_map(|i| usize::try_from(i).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Graph-level index list, `None` unless the array holds a number
///
/// Numbers that are not valid indices (negative, fractional) still count as a
/// declaration but are left out of the list.
fn declared_index_list(value: Option<&Value>) -> Option<Vec<usize>> {
    let items = value?.as_array()?;
    if !items.iter().any(Value::is_number) {
        return None;
    }
    Some(index_list(value))
}

/// Numeric entries of a shape array
fn dimension_list(value: Option<&Value>) -> Vec<i64> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(integral).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_arrays_is_format_error() {
        let err = RawGraph::from_value(&json!({ "foo": 1 })).unwrap_err();
        assert!(matches!(err, GraphError::Format));

        let err = RawGraph::from_value(&json!({ "tensors": [], "nodes": {} })).unwrap_err();
        assert!(matches!(err, GraphError::Format));
    }

    #[test]
    fn test_non_object_root_is_format_error() {
        assert!(matches!(
            RawGraph::from_value(&json!([1, 2])).unwrap_err(),
            GraphError::Format
        ));
        assert!(matches!(
            RawGraph::from_value(&json!("graph")).unwrap_err(),
            GraphError::Format
        ));
    }

    #[test]
    fn test_invalid_json_is_syntax_error() {
        let err = RawGraph::decode("{ not json").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_nested_graph_is_unwrapped() {
        let raw = RawGraph::from_value(&json!({
            "graph": { "id": "inner", "tensors": [{}], "nodes": [] }
        }))
        .unwrap();
        assert_eq!(raw.id.as_deref(), Some("inner"));
        assert_eq!(raw.tensors.len(), 1);
    }

    #[test]
    fn test_non_object_graph_property_is_ignored() {
        let raw = RawGraph::from_value(&json!({
            "graph": "not an object",
            "tensors": [],
            "nodes": []
        }))
        .unwrap();
        assert!(raw.tensors.is_empty());
    }

    #[test]
    fn test_lists_keep_numeric_entries_only() {
        let node = RawNode::from_value(&json!({
            "inputs": [0, "1", 2.0, null, -1, 2.5],
            "outputs": "3"
        }));
        assert_eq!(node.inputs, vec![0, 2]);
        assert!(node.outputs.is_empty());

        let tensor = RawTensor::from_value(&json!({ "shape": [1, "x", -1, 224] }));
        assert_eq!(tensor.shape, vec![1, -1, 224]);
    }

    #[test]
    fn test_graph_lists_record_numeric_declarations() {
        let raw = RawGraph::from_value(&json!({
            "tensors": [],
            "nodes": [],
            "inputs": [-1, 1.5],
            "outputs": ["0", null]
        }))
        .unwrap();
        assert_eq!(raw.inputs, Some(Vec::new()));
        assert_eq!(raw.outputs, None);

        let raw = RawGraph::from_value(&json!({ "tensors": [], "nodes": [], "inputs": [2, "x"] })).unwrap();
        assert_eq!(raw.inputs, Some(vec![2]));
        assert_eq!(raw.outputs, None);
    }

    #[test]
    fn test_empty_objects_are_absent() {
        let node = RawNode::from_value(&json!({ "attributes": {}, "metadata": {} }));
        assert_eq!(node.attributes, Some(Metadata::new()));
        assert!(node.metadata.is_none());
    }

    #[test]
    fn test_non_object_entries_decode_to_defaults() {
        assert_eq!(RawTensor::from_value(&json!(42)), RawTensor::default());
        assert_eq!(RawNode::from_value(&json!(null)), RawNode::default());
    }
}
