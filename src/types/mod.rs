//! Shared data types for the bfs-explorer library.

pub mod edge;
pub mod error;
pub mod output;

pub use edge::Edge;
pub use error::{BfsError, BfsResult};
pub use output::OutputFormat;

/// Node identifier: any non-empty token without whitespace.
pub type NodeId = String;

/// Default separator between a node and its neighbor list.
pub const DEFAULT_SEPARATOR: char = ':';

/// BFS level assigned to the start node.
pub const START_LEVEL: u32 = 0;
