//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::types::{BfsError, BfsResult, Edge, NodeId, START_LEVEL};

use super::AdjacencyGraph;

/// Result of a breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    /// The node the traversal started from.
    pub start: NodeId,
    /// Visited nodes in BFS order. Each node appears exactly once.
    pub order: Vec<NodeId>,
    /// Level (edge-count distance from `start`) of each visited node.
    pub levels: HashMap<NodeId, u32>,
    /// For each visited node other than `start`, the node that discovered it.
    pub discovered_by: HashMap<NodeId, NodeId>,
}

impl TraversalResult {
    /// Level of `node`, or None if it was not reached.
    pub fn level(&self, node: &str) -> Option<u32> {
        self.levels.get(node).copied()
    }

    /// True if `node` was reached.
    pub fn contains(&self, node: &str) -> bool {
        self.levels.contains_key(node)
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest level reached.
    pub fn depth(&self) -> u32 {
        self.levels.values().copied().max().unwrap_or(START_LEVEL)
    }

    /// Visited nodes at `level`, in visitation order.
    pub fn nodes_at_level(&self, level: u32) -> Vec<&NodeId> {
        self.order
            .iter()
            .filter(|node| self.level(node) == Some(level))
            .collect()
    }

    /// The node that discovered `node`. None for the start node and for
    /// nodes that were not reached.
    pub fn parent(&self, node: &str) -> Option<&NodeId> {
        self.discovered_by.get(node)
    }

    /// Graph edges `(u, v)` with both ends visited and
    /// `level(v) == level(u) + 1`, in graph edge order.
    ///
    /// A node reachable from several nodes on the same level has one tree
    /// edge per such predecessor; see [`Self::discovery_edges`] for the
    /// strict spanning tree.
    pub fn tree_edges(&self, graph: &AdjacencyGraph) -> Vec<Edge> {
        graph
            .edges()
            .filter(|(u, v)| match (self.level(u), self.level(v)) {
                (Some(lu), Some(lv)) => lv == lu + 1,
                _ => false,
            })
            .map(|(u, v)| Edge::new(u.clone(), v.clone()))
            .collect()
    }

    /// The edge that discovered each non-start node, in visitation order.
    pub fn discovery_edges(&self) -> Vec<Edge> {
        self.order
            .iter()
            .filter_map(|node| {
                self.parent(node)
                    .map(|parent| Edge::new(parent.clone(), node.clone()))
            })
            .collect()
    }
}

/// Serialises a node-keyed map in visitation order.
struct InOrder<'a, V> {
    order: &'a [NodeId],
    map: &'a HashMap<NodeId, V>,
}

impl<V: Serialize> Serialize for InOrder<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for node in self.order {
            if let Some(value) = self.map.get(node) {
                map.serialize_entry(node, value)?;
            }
        }
        map.end()
    }
}

impl Serialize for TraversalResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TraversalResult", 4)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field(
            "levels",
            &InOrder {
                order: &self.order,
                map: &self.levels,
            },
        )?;
        state.serialize_field(
            "discovered_by",
            &InOrder {
                order: &self.order,
                map: &self.discovered_by,
            },
        )?;
        state.end()
    }
}

/// Breadth-first traversal of `graph` from `start`.
///
/// Neighbors are expanded in listed order. A node is marked seen when it is
/// enqueued, so it is never queued twice and its level is that of the first
/// node to discover it plus one. Nodes unreachable from `start` are absent
/// from the result.
pub fn bfs(graph: &AdjacencyGraph, start: &str) -> BfsResult<TraversalResult> {
    if !graph.contains_node(start) {
        return Err(BfsError::StartNodeNotFound(start.to_string()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut levels: HashMap<NodeId, u32> = HashMap::new();
    let mut discovered_by: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue: VecDeque<(&str, u32)> = VecDeque::new();

    seen.insert(start);
    queue.push_back((start, START_LEVEL));

    while let Some((current, level)) = queue.pop_front() {
        order.push(current.to_string());
        levels.insert(current.to_string(), level);

        for neighbor in graph.neighbors(current) {
            if seen.insert(neighbor.as_str()) {
                discovered_by.insert(neighbor.clone(), current.to_string());
                queue.push_back((neighbor.as_str(), level + 1));
            }
        }
    }

    log::debug!(
        "bfs from {:?}: visited {} of {} nodes",
        start,
        order.len(),
        graph.all_nodes().len()
    );

    Ok(TraversalResult {
        start: start.to_string(),
        order,
        levels,
        discovered_by,
    })
}
