//! The directed edge record produced by the edge-list scanner.

use serde::Serialize;

use super::NodeId;

/// A directed edge `origin -> destination`.
///
/// Self-loops and repeated edges are valid; the graph is a multigraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Node the edge leaves from.
    pub origin: NodeId,
    /// Node the edge points to.
    pub destination: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The larger of the two endpoints.
    pub fn max_id(&self) -> NodeId {
        self.origin.max(self.destination)
    }

    /// Whether the edge starts and ends on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((origin, destination): (NodeId, NodeId)) -> Self {
        Self::new(origin, destination)
    }
}

impl From<Edge> for (NodeId, NodeId) {
    fn from(edge: Edge) -> Self {
        (edge.origin, edge.destination)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
