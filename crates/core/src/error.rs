//! Error types for graph normalization

use thiserror::Error;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while loading a graph document
///
/// Only two failures exist: the text is not JSON at all, or the decoded
/// document lacks the `tensors`/`nodes` arrays. Every other irregularity is
/// normalized to a default during parsing.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input text is not well-formed JSON
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// The decoded document is missing one of the required arrays
    #[error("Invalid graph: missing tensors or nodes")]
    Format,
}

impl GraphError {
    /// Whether this error came from the JSON decoder
    pub fn is_syntax(&self) -> bool {
        matches!(self, GraphError::Syntax(_))
    }
}

/// Errors raised by the dependency view over a normalized graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The edges form a cycle through the named node
    #[error("Graph contains a cycle through node '{node}'")]
    Cycle { node: String },

    /// No node carries the requested id
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        assert_eq!(
            GraphError::Format.to_string(),
            "Invalid graph: missing tensors or nodes"
        );
    }

    #[test]
    fn test_syntax_error_is_transparent() {
        let decode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = decode_err.to_string();
        let err = GraphError::from(decode_err);
        assert!(err.is_syntax());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_cycle_error_names_node() {
        let err = AnalysisError::Cycle {
            node: "relu".to_string(),
        };
        assert!(err.to_string().contains("'relu'"));
    }
}
