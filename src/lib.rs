//! neuronet: compressed sparse row graph engine.
//!
//! Loads plain-text edge lists into an immutable CSR layout built with a
//! two-pass counting sort, and answers neighbor, degree and bounded-depth
//! BFS/DFS queries over it.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod handle;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{TraversalEngine, TraversalParams};
pub use format::{parse_record, EdgeListReader, MmapEdgeList, Record};
pub use graph::{
    bounded_bfs, bounded_dfs, CsrGraph, GraphBuilder, LoadOptions, SparseGraph, TraversalOrder,
    TraversalResult,
};
pub use handle::{GraphHandle, NO_NODE};
pub use types::{
    Edge, GraphError, GraphResult, LoadProgress, LoadStats, NodeId, DEFAULT_PROGRESS_INTERVAL,
};
