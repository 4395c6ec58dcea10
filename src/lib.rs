//! bfs-explorer: breadth-first traversal of directed adjacency-list graphs.
//!
//! Parses `node: n1 n2` text into an ordered adjacency mapping, runs BFS
//! from a start node, and exposes the visitation order, per-node levels and
//! the BFS tree edges for presentation layers to display.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{Session, Snapshot, SubmitReport};
pub use format::{parse_adjacency, ParseOptions, ParsedGraph, SkippedLine};
pub use graph::{bfs, AdjacencyGraph, GraphBuilder, TraversalResult};
pub use types::{BfsError, BfsResult, Edge, NodeId, OutputFormat, DEFAULT_SEPARATOR};
