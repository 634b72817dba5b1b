//! Bounded-depth graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::types::{Edge, NodeId};

use super::SparseGraph;

/// Which traversal produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Level-order search; `edges` holds every edge of every expanded node.
    BreadthFirst,
    /// Stack-based search; `edges` holds spanning-tree edges only.
    DepthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output of a bounded traversal. Owned, independent of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// Traversal that produced this result.
    pub order: TraversalOrder,
    /// Each visited node exactly once, origin first, in visit order.
    pub nodes: Vec<NodeId>,
    /// BFS: explored edges. DFS: tree edges `(parent, child)`.
    pub edges: Vec<Edge>,
    /// Deepest level at which a node was visited.
    pub depth_reached: u32,
}

impl TraversalResult {
    /// An empty result, returned for out-of-range origins.
    pub fn empty(order: TraversalOrder) -> Self {
        Self {
            order,
            nodes: Vec::new(),
            edges: Vec::new(),
            depth_reached: 0,
        }
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct levels visited, 0 for an empty result.
    pub fn levels_explored(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.depth_reached + 1
        }
    }
}

/// BFS from `origin`, expanding nodes whose level is below `max_depth`.
///
/// Every out-edge of an expanded node is recorded, including edges that lead
/// back to nodes already visited; only unvisited destinations are enqueued.
pub fn bounded_bfs<G>(graph: &G, origin: NodeId, max_depth: u32) -> TraversalResult
where
    G: SparseGraph + ?Sized,
{
    let mut result = TraversalResult::empty(TraversalOrder::BreadthFirst);
    if !graph.contains_node(origin) {
        debug!("BFS origin {} is out of range", origin);
        return result;
    }
    debug!("BFS from {} (max depth {})", origin, max_depth);

    let mut visited = vec![false; graph.node_count()];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    visited[origin as usize] = true;
    result.nodes.push(origin);
    queue.push_back((origin, 0));

    let mut reported_level = None;
    while let Some((node, depth)) = queue.pop_front() {
        if reported_level != Some(depth) {
            reported_level = Some(depth);
            trace!("BFS exploring level {}", depth);
        }
        result.depth_reached = result.depth_reached.max(depth);

        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbors(node) {
            result.edges.push(Edge::new(node, next));

            let seen = &mut visited[next as usize];
            if !*seen {
                *seen = true;
                result.nodes.push(next);
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(
        "BFS done: {} levels, {} nodes, {} edges",
        result.levels_explored(),
        result.nodes.len(),
        result.edges.len()
    );
    result
}

/// One pending DFS visit.
struct Frame {
    node: NodeId,
    depth: u32,
    parent: Option<NodeId>,
}

/// Iterative DFS from `origin`, expanding nodes whose depth is below `max_depth`.
///
/// A node counts as visited when its frame is popped; stale frames for nodes
/// reached first along another branch are dropped. Children are pushed in
/// reverse so they pop in stored order, matching recursive DFS.
pub fn bounded_dfs<G>(graph: &G, origin: NodeId, max_depth: u32) -> TraversalResult
where
    G: SparseGraph + ?Sized,
{
    let mut result = TraversalResult::empty(TraversalOrder::DepthFirst);
    if !graph.contains_node(origin) {
        debug!("DFS origin {} is out of range", origin);
        return result;
    }
    debug!("DFS from {} (max depth {})", origin, max_depth);

    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![Frame {
        node: origin,
        depth: 0,
        parent: None,
    }];

    while let Some(frame) = stack.pop() {
        let seen = &mut visited[frame.node as usize];
        if *seen {
            continue;
        }
        *seen = true;

        result.nodes.push(frame.node);
        if let Some(parent) = frame.parent {
            result.edges.push(Edge::new(parent, frame.node));
        }
        result.depth_reached = result.depth_reached.max(frame.depth);

        if frame.depth >= max_depth {
            continue;
        }

        for &next in graph.neighbors(frame.node).iter().rev() {
            // Pruning only; the pop-time check above is what decides.
            if !visited[next as usize] {
                stack.push(Frame {
                    node: next,
                    depth: frame.depth + 1,
                    parent: Some(frame.node),
                });
            }
        }
    }

    debug!(
        "DFS done: {} levels, {} nodes, {} tree edges",
        result.levels_explored(),
        result.nodes.len(),
        result.edges.len()
    );
    result
}
