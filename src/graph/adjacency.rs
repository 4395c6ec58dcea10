//! Core graph structure: an ordered adjacency mapping from node to neighbors.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Edge, NodeId};

/// Directed graph stored as `node -> [neighbor, ...]`.
///
/// Keys keep their first-insertion order and neighbor lists keep the order
/// they were given in, so every traversal over the graph is deterministic.
/// Nodes that only appear as neighbors have no entry and no outgoing edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Node entries in first-insertion order.
    entries: Vec<(NodeId, Vec<NodeId>)>,
    /// Index: node id -> position in `entries`.
    index: HashMap<NodeId, usize>,
}

impl AdjacencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor list of `node`, returning the list it replaced.
    ///
    /// A node that is already present keeps its position.
    pub fn insert(
        &mut self,
        node: impl Into<NodeId>,
        neighbors: Vec<NodeId>,
    ) -> Option<Vec<NodeId>> {
        let node = node.into();
        match self.index.get(&node) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, neighbors)),
            None => {
                self.index.insert(node.clone(), self.entries.len());
                self.entries.push((node, neighbors));
                None
            }
        }
    }

    /// Append `target` to the neighbor list of `source`, creating `source` if needed.
    pub fn push_edge(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) {
        let source = source.into();
        let target = target.into();
        match self.index.get(&source) {
            Some(&pos) => self.entries[pos].1.push(target),
            None => {
                self.insert(source, vec![target]);
            }
        }
    }

    /// True if `node` has an entry (possibly with no neighbors).
    pub fn contains_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    /// Neighbors of `node` in listed order. Empty for nodes without an entry.
    pub fn neighbors(&self, node: &str) -> &[NodeId] {
        match self.index.get(node) {
            Some(&pos) => &self.entries[pos].1,
            None => &[],
        }
    }

    /// Nodes with an entry, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.entries.iter().map(|(node, _)| node)
    }

    /// `(node, neighbors)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> + '_ {
        self.entries
            .iter()
            .map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// Every node mentioned anywhere: entries first, then neighbor-only
    /// nodes in order of first appearance.
    pub fn all_nodes(&self) -> Vec<&NodeId> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut result = Vec::new();
        for node in self.nodes() {
            if seen.insert(node.as_str()) {
                result.push(node);
            }
        }
        for (_, neighbors) in &self.entries {
            for neighbor in neighbors {
                if seen.insert(neighbor.as_str()) {
                    result.push(neighbor);
                }
            }
        }
        result
    }

    /// All directed edges in entry order, then neighbor order. Duplicate
    /// neighbors yield duplicate edges.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.entries
            .iter()
            .flat_map(|(node, neighbors)| neighbors.iter().map(move |n| (node, n)))
    }

    /// All directed edges as owned [`Edge`] values.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges()
            .map(|(source, target)| Edge::new(source.clone(), target.clone()))
            .collect()
    }

    /// Number of nodes with an entry.
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of directed edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, n)| n.len()).sum()
    }

    /// True if the graph has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl Serialize for AdjacencyGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (node, neighbors) in &self.entries {
            map.serialize_entry(node, neighbors)?;
        }
        map.end()
    }
}

struct AdjacencyVisitor;

impl<'de> Visitor<'de> for AdjacencyVisitor {
    type Value = AdjacencyGraph;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from node id to a list of neighbor ids")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut graph = AdjacencyGraph::new();
        while let Some((node, neighbors)) = access.next_entry::<NodeId, Vec<NodeId>>()? {
            graph.insert(node, neighbors);
        }
        Ok(graph)
    }
}

impl<'de> Deserialize<'de> for AdjacencyGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AdjacencyVisitor)
    }
}
