//! Edge list to CSR construction.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::format::{EdgeListReader, EdgeScanner, MmapEdgeList, ProgressFn, ScannedEdges};
use crate::types::{
    now_micros, Edge, GraphError, GraphResult, LoadProgress, NodeId, DEFAULT_PROGRESS_INTERVAL,
};

use super::{CsrGraph, SparseGraph};

/// Tunables for a load.
///
/// The CSR arrays are sized by the largest id seen, not by the edge count:
/// a single line `4294967295 0` asks for roughly 80 GB. Set `max_node_id`
/// when the text input is not trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Report progress every N accepted edges. 0 disables reporting.
    pub progress_interval: usize,
    /// Initial capacity of the edge buffer.
    pub reserve_edges: usize,
    /// Largest id accepted from text input; lines above it count as malformed.
    pub max_node_id: Option<NodeId>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            reserve_edges: 0,
            max_node_id: None,
        }
    }
}

/// Loads edge lists into [`CsrGraph`]s.
///
/// A builder can be reused; every call produces a brand-new graph or an
/// error, never a partially built one.
pub struct GraphBuilder {
    options: LoadOptions,
    progress: Option<ProgressFn>,
}

impl GraphBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::with_options(LoadOptions::default())
    }

    /// Create a builder with specific options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            options,
            progress: None,
        }
    }

    /// Set the progress interval.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.options.progress_interval = interval;
        self
    }

    /// Set the edge buffer capacity hint.
    pub fn reserve_edges(mut self, edges: usize) -> Self {
        self.options.reserve_edges = edges;
        self
    }

    /// Cap the ids accepted from text input.
    pub fn max_node_id(mut self, max_node_id: NodeId) -> Self {
        self.options.max_node_id = Some(max_node_id);
        self
    }

    /// Send progress reports to `progress` instead of the log.
    pub fn on_progress<F>(mut self, progress: F) -> Self
    where
        F: FnMut(LoadProgress) + Send + 'static,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load an edge-list file through a buffered reader.
    pub fn load_path(&mut self, path: &Path) -> GraphResult<CsrGraph> {
        self.load_with(&path.display().to_string(), |scanner| {
            EdgeListReader::scan_file(path, scanner)
        })
    }

    /// Load an edge-list file through a read-only memory map.
    pub fn load_mmap(&mut self, path: &Path) -> GraphResult<CsrGraph> {
        self.load_with(&path.display().to_string(), |scanner| {
            let map = MmapEdgeList::open(path)?;
            debug!("Mapped {} ({} bytes)", map.path().display(), map.len());
            map.scan(scanner);
            Ok(())
        })
    }

    /// Load from any buffered stream.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> GraphResult<CsrGraph> {
        self.load_with("<stream>", move |scanner| {
            EdgeListReader::scan(reader, "<stream>", scanner)
        })
    }

    /// Load from edge-list text held in memory.
    pub fn load_str(&mut self, text: &str) -> GraphResult<CsrGraph> {
        self.load_reader(text.as_bytes())
    }

    /// Build from edges that are already validated. `max_node_id` does not apply.
    pub fn from_edges<I>(&mut self, edges: I) -> GraphResult<CsrGraph>
    where
        I: IntoIterator<Item = Edge>,
    {
        self.load_with("<edges>", move |scanner| {
            for edge in edges {
                scanner.push_edge(edge);
            }
            Ok(())
        })
    }

    fn load_with<F>(&mut self, source_name: &str, scan: F) -> GraphResult<CsrGraph>
    where
        F: FnOnce(&mut EdgeScanner<'_>) -> GraphResult<()>,
    {
        let started = Instant::now();
        info!("Loading edge list from {}", source_name);

        let mut scanner = EdgeScanner::new(self.options.progress_interval)
            .with_capacity(self.options.reserve_edges)
            .with_max_node_id(self.options.max_node_id)
            .with_progress(self.progress.as_mut());

        if let Err(e) = scan(&mut scanner) {
            warn!("Load of {} failed: {}", source_name, e);
            return Err(e);
        }

        let scanned = scanner.finish();
        info!(
            "Read complete: {} lines read, {} valid",
            scanned.stats.lines_read, scanned.stats.valid_edges
        );

        build_csr(scanned, started).inspect_err(|e| warn!("Load of {} failed: {}", source_name, e))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-pass counting sort from the edge buffer into CSR arrays.
fn build_csr(scanned: ScannedEdges, started: Instant) -> GraphResult<CsrGraph> {
    let ScannedEdges {
        edges,
        max_id,
        mut stats,
    } = scanned;
    let max_id = max_id.ok_or(GraphError::EmptyOrInvalidInput)?;
    let node_count = max_id as usize + 1;

    let mut out_degree = vec![0usize; node_count];
    for edge in &edges {
        out_degree[edge.origin as usize] += 1;
    }
    debug!("Step 1/3: out-degrees counted");

    let mut row_offset = vec![0usize; node_count + 1];
    for (i, &degree) in out_degree.iter().enumerate() {
        row_offset[i + 1] = row_offset[i] + degree;
    }
    debug!("Step 2/3: row offsets ready");

    // Stable bucket fill: each origin's edges keep their input order.
    let mut column_index: Vec<NodeId> = vec![0; edges.len()];
    let mut running = vec![0usize; node_count];
    for edge in &edges {
        let u = edge.origin as usize;
        column_index[row_offset[u] + running[u]] = edge.destination;
        running[u] += 1;
    }
    debug!("Step 3/3: column indices filled");

    stats.duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    stats.loaded_at = now_micros();

    let graph = CsrGraph::from_parts(row_offset, column_index, out_degree, stats);
    info!(
        "Load complete: {} nodes, {} edges, ~{:.2} MB, {:.2} ms",
        graph.node_count(),
        graph.edge_count(),
        graph.estimated_memory_mb(),
        graph.last_load_duration_ms()
    );
    Ok(graph)
}
