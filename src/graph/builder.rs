//! Fluent API for building AdjacencyGraph instances.

use crate::types::NodeId;

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: AdjacencyGraph,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `node` with the given neighbors, replacing any earlier list.
    pub fn node<I, S>(mut self, node: &str, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        let neighbors = neighbors.into_iter().map(Into::into).collect();
        self.graph.insert(node, neighbors);
        self
    }

    /// Define `node` with no outgoing edges.
    pub fn leaf(self, node: &str) -> Self {
        self.node(node, std::iter::empty::<NodeId>())
    }

    /// Add a directed edge, creating the source node if needed.
    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.graph.push_edge(source, target);
        self
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> AdjacencyGraph {
        self.graph
    }
}
