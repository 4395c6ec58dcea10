//! In-memory graph operations: the data model and BFS traversal.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{bfs, TraversalResult};
