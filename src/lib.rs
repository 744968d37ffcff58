//! # graphlens
//!
//! Normalize computation-graph documents for visualization.
//!
//! ## Overview
//!
//! Graph viewers receive computation graphs as loosely-structured JSON: a list
//! of tensors and a list of operator nodes referencing them by index. This
//! crate turns such a document into a model that layout and rendering code can
//! trust:
//! - every tensor has an id, a role, a shape and a dtype
//! - input, output and weight tensors get their own boundary nodes
//! - edges are derived from which operators produce and consume each tensor
//! - graph-level inputs and outputs are always resolved
//!
//! ## CLI Usage
//!
//! ```bash
//! # Normalize a graph document
//! graphlens parse model.json -o model.normalized.json
//!
//! # Summarize it
//! graphlens info model.json
//!
//! # Flatten operator nodes into rows
//! graphlens rows model.json
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use graphlens::parse;
//!
//! let graph = parse(r#"{ "tensors": [{ "name": "input" }], "nodes": [] }"#)?;
//! assert_eq!(graph.inputs, vec![0]);
//! assert_eq!(graph.nodes[0].name, "Input");
//! # Ok::<(), graphlens::GraphError>(())
//! ```

// Re-export everything from the core crate
pub use graphlens_core::*;

/// Get the version of graphlens
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
