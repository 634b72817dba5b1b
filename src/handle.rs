//! Owning handle exposing the graph operations with signed, boundary-friendly ids.

use std::io::BufRead;
use std::path::Path;

use crate::engine::TraversalEngine;
use crate::graph::{CsrGraph, GraphBuilder, SparseGraph, TraversalOrder, TraversalResult};
use crate::types::{GraphResult, NodeId};

/// Returned where a node id is expected but none exists.
pub const NO_NODE: i64 = -1;

/// Holds at most one loaded graph.
///
/// A failed load leaves the previously loaded graph in place. The graph is
/// released when the handle is dropped.
pub struct GraphHandle {
    builder: GraphBuilder,
    graph: Option<CsrGraph>,
}

impl GraphHandle {
    /// Create an empty handle with a default builder.
    pub fn new() -> Self {
        Self::with_builder(GraphBuilder::new())
    }

    /// Create an empty handle that loads through `builder`.
    pub fn with_builder(builder: GraphBuilder) -> Self {
        Self {
            builder,
            graph: None,
        }
    }

    /// Load `path` into a fresh handle.
    pub fn open(path: &Path) -> GraphResult<Self> {
        let mut handle = Self::new();
        handle.load(path)?;
        Ok(handle)
    }

    /// Load an edge-list file, replacing the current graph on success.
    pub fn load(&mut self, path: &Path) -> GraphResult<()> {
        let graph = self.builder.load_path(path)?;
        self.graph = Some(graph);
        Ok(())
    }

    /// Like [`load`](Self::load), reading through a memory map.
    pub fn load_mmap(&mut self, path: &Path) -> GraphResult<()> {
        let graph = self.builder.load_mmap(path)?;
        self.graph = Some(graph);
        Ok(())
    }

    /// Load from a stream, replacing the current graph on success.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> GraphResult<()> {
        let graph = self.builder.load_reader(reader)?;
        self.graph = Some(graph);
        Ok(())
    }

    /// Whether a graph is loaded.
    pub fn is_loaded(&self) -> bool {
        self.graph.is_some()
    }

    /// The loaded graph, if any.
    pub fn graph(&self) -> Option<&CsrGraph> {
        self.graph.as_ref()
    }

    /// A query engine over the loaded graph, if any.
    pub fn engine(&self) -> Option<TraversalEngine<'_>> {
        self.graph.as_ref().map(TraversalEngine::new)
    }

    /// Node count, 0 when nothing is loaded.
    pub fn total_nodes(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.node_count())
    }

    /// Edge count, 0 when nothing is loaded.
    pub fn total_edges(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.edge_count())
    }

    /// Node with the largest out-degree, or [`NO_NODE`].
    pub fn node_with_max_degree(&self) -> i64 {
        self.graph
            .as_ref()
            .and_then(|g| g.node_with_max_degree())
            .map_or(NO_NODE, i64::from)
    }

    /// Out-degree of `node`, or -1 when out of range.
    pub fn degree(&self, node: i64) -> i64 {
        self.resolve(node)
            .and_then(|(g, node)| g.out_degree(node))
            .map_or(-1, |d| d as i64)
    }

    /// Owned copy of the out-neighbors of `node`; empty when out of range.
    pub fn neighbors(&self, node: i64) -> Vec<NodeId> {
        self.resolve(node)
            .map(|(g, node)| g.neighbors(node).to_vec())
            .unwrap_or_default()
    }

    /// Bounded BFS. A negative `max_depth` behaves like 0.
    pub fn bounded_bfs(&self, origin: i64, max_depth: i64) -> TraversalResult {
        match self.resolve(origin) {
            Some((g, origin)) => crate::graph::bounded_bfs(g, origin, clamp_depth(max_depth)),
            None => TraversalResult::empty(TraversalOrder::BreadthFirst),
        }
    }

    /// Bounded DFS. A negative `max_depth` behaves like 0.
    pub fn bounded_dfs(&self, origin: i64, max_depth: i64) -> TraversalResult {
        match self.resolve(origin) {
            Some((g, origin)) => crate::graph::bounded_dfs(g, origin, clamp_depth(max_depth)),
            None => TraversalResult::empty(TraversalOrder::DepthFirst),
        }
    }

    /// Estimated bytes held by the CSR arrays.
    pub fn estimated_memory_bytes(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.estimated_memory_bytes())
    }

    /// Estimated mebibytes held by the CSR arrays.
    pub fn estimated_memory_mb(&self) -> f64 {
        self.graph.as_ref().map_or(0.0, |g| g.estimated_memory_mb())
    }

    /// Duration of the load that produced the current graph.
    pub fn last_load_duration_ms(&self) -> f64 {
        self.graph.as_ref().map_or(0.0, |g| g.last_load_duration_ms())
    }

    fn resolve(&self, node: i64) -> Option<(&CsrGraph, NodeId)> {
        let graph = self.graph.as_ref()?;
        let node = NodeId::try_from(node).ok()?;
        graph.contains_node(node).then_some((graph, node))
    }
}

impl Default for GraphHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_depth(max_depth: i64) -> u32 {
    max_depth.clamp(0, i64::from(u32::MAX)) as u32
}
