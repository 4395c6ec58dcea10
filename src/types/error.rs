//! Error types for the bfs-explorer library.

use thiserror::Error;

/// All errors that can occur in the bfs-explorer library.
#[derive(Error, Debug)]
pub enum BfsError {
    /// The requested start node is not a key of the graph.
    #[error("Start node {0:?} not found in graph")]
    StartNodeNotFound(String),

    /// An input line has no node/neighbor separator (strict parsing only).
    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// An input line has an empty node identifier before the separator.
    #[error("Empty node identifier on line {line}")]
    EmptyNodeId { line: usize },

    /// The separator cannot be used to split adjacency lines.
    #[error("Invalid separator {0:?}: must be a non-whitespace character")]
    InvalidSeparator(char),

    /// A node id cannot be written as adjacency text with the given separator.
    #[error("Node id {id:?} cannot be written as adjacency text with separator {separator:?}")]
    UnrepresentableNodeId { id: String, separator: char },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BfsError {
    /// True for errors caused by the shape of the input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedLine { .. }
                | Self::EmptyNodeId { .. }
                | Self::InvalidSeparator(_)
                | Self::UnrepresentableNodeId { .. }
                | Self::Json(_)
        )
    }
}

/// Convenience result type for bfs-explorer operations.
pub type BfsResult<T> = Result<T, BfsError>;
