//! Flatten operator nodes into table rows
//!
//! Each operator node becomes one row holding `index`, `id` and `name` plus
//! every leaf of its `attributes` and `metadata`. Nested objects flatten to
//! dotted keys (`attributes.kernel.size`). A key a node does not have is
//! simply absent from its row.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Metadata, Node};

/// Fixed leading columns of every row
pub const BASE_COLUMNS: [&str; 3] = ["index", "id", "name"];

/// One flattened operator node
pub type Row = Metadata;

/// Flattened operator nodes plus the union of their keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowTable {
    /// `index`, `id`, `name`, then every other key in first-seen order
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, `None` where a row lacks the key
    pub fn column<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.rows.iter().map(move |row| row.get(key))
    }
}

/// Flatten every non-tensor node of `nodes`
///
/// `index` counts operator rows only, so boundary nodes never leave gaps.
pub fn flatten_rows(nodes: &[Node]) -> RowTable {
    let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut rows = Vec::new();

    for (index, node) in nodes.iter().filter(|node| !node.is_tensor_node()).enumerate() {
        let mut row = Row::new();
        row.insert("index".to_string(), Value::from(index));
        row.insert("id".to_string(), Value::String(node.id.clone()));
        row.insert("name".to_string(), Value::String(node.name.clone()));

        flatten_into(&mut row, "attributes", &node.attributes);
        if let Some(metadata) = &node.metadata {
            flatten_into(&mut row, "metadata", metadata);
        }

        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
        rows.push(row);
    }

    RowTable { columns, rows }
}

fn flatten_into(row: &mut Row, prefix: &str, map: &Metadata) {
    for (key, value) in map {
        let path = format!("{prefix}.{key}");
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(row, &path, nested),
            other => {
                row.insert(path, other.clone());
            }
        }
    }
}
