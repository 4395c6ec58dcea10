//! Per-caller traversal state: the current graph and its latest BFS result.

use serde::Serialize;

use crate::format::{parse_adjacency, ParseOptions, SkippedLine};
use crate::graph::{bfs, AdjacencyGraph, TraversalResult};
use crate::types::{BfsResult, Edge};

/// Summary of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReport {
    /// Nodes with an entry in the submitted graph.
    pub node_count: usize,
    /// Directed edges in the submitted graph.
    pub edge_count: usize,
    /// Nodes reached from the start node.
    pub visited: usize,
    /// Largest BFS level reached.
    pub depth: u32,
    /// Input lines ignored while parsing.
    pub skipped: Vec<SkippedLine>,
}

/// Everything a presentation layer needs to display the current state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// The current graph.
    pub graph: &'a AdjacencyGraph,
    /// The latest traversal, if any.
    pub result: Option<&'a TraversalResult>,
    /// BFS tree edges of the latest traversal.
    pub tree_edges: Vec<Edge>,
}

/// Holds one caller's graph and traversal result.
///
/// A failed submission leaves the previous graph and result untouched.
#[derive(Debug, Default)]
pub struct Session {
    options: ParseOptions,
    graph: AdjacencyGraph,
    result: Option<TraversalResult>,
}

impl Session {
    /// Create an empty session with default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given parse options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse options used by [`Self::submit`].
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text`, run BFS from `start` and, on success, make the pair the
    /// session's current state.
    pub fn submit(&mut self, text: &str, start: &str) -> BfsResult<SubmitReport> {
        let parsed = parse_adjacency(text, &self.options)?;
        let mut report = self.submit_graph(parsed.graph, start)?;
        report.skipped = parsed.skipped;
        Ok(report)
    }

    /// Run BFS over an already-built graph and, on success, make it current.
    pub fn submit_graph(&mut self, graph: AdjacencyGraph, start: &str) -> BfsResult<SubmitReport> {
        let start = start.trim();
        let result = match bfs(&graph, start) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("submission rejected: {}", e);
                return Err(e);
            }
        };

        let report = SubmitReport {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            visited: result.len(),
            depth: result.depth(),
            skipped: Vec::new(),
        };
        log::debug!(
            "session updated: {} nodes, {} visited from {:?}",
            report.node_count,
            report.visited,
            start
        );

        self.graph = graph;
        self.result = Some(result);
        Ok(report)
    }

    /// Clear the graph and result.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.result = None;
        log::debug!("session reset");
    }

    /// The current graph.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// The latest traversal result.
    pub fn result(&self) -> Option<&TraversalResult> {
        self.result.as_ref()
    }

    /// BFS tree edges of the latest traversal; empty if there is none.
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.result
            .as_ref()
            .map(|result| result.tree_edges(&self.graph))
            .unwrap_or_default()
    }

    /// Borrowed view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            graph: &self.graph,
            result: self.result.as_ref(),
            tree_edges: self.tree_edges(),
        }
    }
}
