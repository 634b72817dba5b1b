//! In-memory CSR graph: construction, storage and traversal.

pub mod builder;
pub mod csr_graph;
pub mod traversal;

pub use builder::{GraphBuilder, LoadOptions};
pub use csr_graph::CsrGraph;
pub use traversal::{bounded_bfs, bounded_dfs, TraversalOrder, TraversalResult};

use crate::types::NodeId;

/// Read-only capabilities every graph backing must provide.
///
/// Traversals only need this trait, so an alternative layout (an adjacency
/// list, say) can be dropped in without touching them.
pub trait SparseGraph {
    /// Number of node ids, `max_id + 1`.
    fn node_count(&self) -> usize;

    /// Number of stored edges, counting duplicates.
    fn edge_count(&self) -> usize;

    /// Out-neighbors of `node` in stored order. Empty when out of range.
    ///
    /// Every returned id must itself be in range.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// Out-degree of `node`, or `None` when out of range.
    fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.contains_node(node).then(|| self.neighbors(node).len())
    }

    /// Whether `node` is inside `[0, node_count)`.
    fn contains_node(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }

    /// Node with the largest out-degree; ties go to the smallest id.
    fn node_with_max_degree(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for node in 0..self.node_count() {
            let node = node as NodeId;
            let degree = self.neighbors(node).len();
            if best.map_or(true, |(_, d)| degree > d) {
                best = Some((node, degree));
            }
        }
        best.map(|(node, _)| node)
    }

    /// Approximate heap bytes held by the graph arrays.
    fn estimated_memory_bytes(&self) -> usize;
}
