//! Compressed sparse row storage.

use std::mem::size_of;

use crate::types::{Edge, LoadStats, NodeId, BYTES_PER_MB};

use super::SparseGraph;

/// Immutable directed multigraph in CSR layout.
///
/// `column_index[row_offset[i]..row_offset[i + 1]]` holds the out-neighbors of
/// node `i`, in the order the edges appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// `row_offset[i]` is the first column slot of node `i`; length `node_count + 1`.
    row_offset: Vec<usize>,
    /// Destination ids grouped by origin.
    column_index: Vec<NodeId>,
    /// Out-degree per node.
    out_degree: Vec<usize>,
    /// How the graph was loaded.
    stats: LoadStats,
}

impl CsrGraph {
    /// Assemble from arrays produced by the builder.
    pub(crate) fn from_parts(
        row_offset: Vec<usize>,
        column_index: Vec<NodeId>,
        out_degree: Vec<usize>,
        stats: LoadStats,
    ) -> Self {
        debug_assert_eq!(row_offset.len(), out_degree.len() + 1);
        debug_assert_eq!(row_offset.first().copied(), Some(0));
        debug_assert_eq!(row_offset.last().copied(), Some(column_index.len()));

        Self {
            row_offset,
            column_index,
            out_degree,
            stats,
        }
    }

    /// Row offsets, length `node_count + 1`.
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offset
    }

    /// Column indices, length `edge_count`.
    pub fn column_indices(&self) -> &[NodeId] {
        &self.column_index
    }

    /// Out-degree array, length `node_count`.
    pub fn out_degrees(&self) -> &[usize] {
        &self.out_degree
    }

    /// Statistics of the load that produced this graph.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Wall-clock duration of the load, in milliseconds.
    pub fn last_load_duration_ms(&self) -> f64 {
        self.stats.duration_ms
    }

    /// Memory estimate in mebibytes.
    pub fn estimated_memory_mb(&self) -> f64 {
        self.estimated_memory_bytes() as f64 / BYTES_PER_MB
    }

    /// All edges in CSR order (grouped by origin).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.row_offset
            .windows(2)
            .enumerate()
            .flat_map(move |(origin, bounds)| {
                self.column_index[bounds[0]..bounds[1]]
                    .iter()
                    .map(move |&destination| Edge::new(origin as NodeId, destination))
            })
    }
}

impl SparseGraph for CsrGraph {
    fn node_count(&self) -> usize {
        self.out_degree.len()
    }

    fn edge_count(&self) -> usize {
        self.column_index.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let i = node as usize;
        if i >= self.out_degree.len() {
            return &[];
        }
        &self.column_index[self.row_offset[i]..self.row_offset[i + 1]]
    }

    fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.out_degree.get(node as usize).copied()
    }

    fn node_with_max_degree(&self) -> Option<NodeId> {
        let (first, rest) = self.out_degree.split_first()?;
        let mut best = (0usize, *first);
        for (i, &degree) in rest.iter().enumerate() {
            if degree > best.1 {
                best = (i + 1, degree);
            }
        }
        Some(best.0 as NodeId)
    }

    fn estimated_memory_bytes(&self) -> usize {
        self.row_offset.len() * size_of::<usize>()
            + self.column_index.len() * size_of::<NodeId>()
            + self.out_degree.len() * size_of::<usize>()
    }
}
