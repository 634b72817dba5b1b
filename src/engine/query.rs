//! Query executor over an immutable graph.

use serde::{Deserialize, Serialize};

use crate::graph::traversal::{bounded_bfs, bounded_dfs, TraversalOrder, TraversalResult};
use crate::graph::{CsrGraph, SparseGraph};
use crate::types::NodeId;

/// Parameters for a traversal query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalParams {
    /// Starting node ID.
    pub origin: NodeId,
    /// Maximum depth (number of hops).
    pub max_depth: u32,
    /// Breadth-first or depth-first.
    pub order: TraversalOrder,
}

impl TraversalParams {
    /// Breadth-first parameters.
    pub fn bfs(origin: NodeId, max_depth: u32) -> Self {
        Self {
            origin,
            max_depth,
            order: TraversalOrder::BreadthFirst,
        }
    }

    /// Depth-first parameters.
    pub fn dfs(origin: NodeId, max_depth: u32) -> Self {
        Self {
            origin,
            max_depth,
            order: TraversalOrder::DepthFirst,
        }
    }
}

/// Read-only query engine borrowing a graph.
///
/// Engines are `Copy`; any number of them may share one graph, including
/// across threads.
pub struct TraversalEngine<'g, G: SparseGraph + ?Sized = CsrGraph> {
    graph: &'g G,
}

impl<G: SparseGraph + ?Sized> Clone for TraversalEngine<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: SparseGraph + ?Sized> Copy for TraversalEngine<'_, G> {}

impl<'g, G: SparseGraph + ?Sized> TraversalEngine<'g, G> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The graph being queried.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Out-degree of `node`, `None` when out of range.
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.graph.out_degree(node)
    }

    /// Owned copy of the out-neighbors of `node`.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.graph.neighbors(node).to_vec()
    }

    /// Node with the largest out-degree (smallest id on ties).
    pub fn node_with_max_degree(&self) -> Option<NodeId> {
        self.graph.node_with_max_degree()
    }

    /// Bounded breadth-first search.
    pub fn bounded_bfs(&self, origin: NodeId, max_depth: u32) -> TraversalResult {
        bounded_bfs(self.graph, origin, max_depth)
    }

    /// Bounded depth-first search.
    pub fn bounded_dfs(&self, origin: NodeId, max_depth: u32) -> TraversalResult {
        bounded_dfs(self.graph, origin, max_depth)
    }

    /// Run whichever traversal `params` asks for.
    pub fn traverse(&self, params: TraversalParams) -> TraversalResult {
        match params.order {
            TraversalOrder::BreadthFirst => self.bounded_bfs(params.origin, params.max_depth),
            TraversalOrder::DepthFirst => self.bounded_dfs(params.origin, params.max_depth),
        }
    }
}
