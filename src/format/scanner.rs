//! The single scanning pass shared by every edge-list source.

use log::info;

use crate::types::{Edge, LoadProgress, LoadStats, NodeId};

use super::record::{parse_record_bytes, Record};

/// Callback invoked every `progress_interval` accepted edges.
pub type ProgressFn = Box<dyn FnMut(LoadProgress) + Send>;

/// Output of the scanning pass: the edge buffer plus what was seen.
#[derive(Debug, Clone)]
pub struct ScannedEdges {
    /// Accepted edges, in input order.
    pub edges: Vec<Edge>,
    /// Largest id over both endpoints, `None` if no edge was accepted.
    pub max_id: Option<NodeId>,
    /// Line counters. `duration_ms` and `loaded_at` are filled in later.
    pub stats: LoadStats,
}

/// Accumulates edges line by line and reports progress.
pub struct EdgeScanner<'p> {
    edges: Vec<Edge>,
    max_id: Option<NodeId>,
    stats: LoadStats,
    progress_interval: usize,
    max_node_id: Option<NodeId>,
    progress: Option<&'p mut ProgressFn>,
}

impl<'p> EdgeScanner<'p> {
    /// Create a scanner. An interval of 0 disables progress reports.
    pub fn new(progress_interval: usize) -> Self {
        Self {
            edges: Vec::new(),
            max_id: None,
            stats: LoadStats::default(),
            progress_interval,
            max_node_id: None,
            progress: None,
        }
    }

    /// Pre-allocate the edge buffer.
    pub fn with_capacity(mut self, edges: usize) -> Self {
        self.edges.reserve(edges);
        self
    }

    /// Treat text edges naming an id above `max_node_id` as malformed.
    pub fn with_max_node_id(mut self, max_node_id: Option<NodeId>) -> Self {
        self.max_node_id = max_node_id;
        self
    }

    /// Route progress reports to `progress` instead of the log.
    pub fn with_progress(mut self, progress: Option<&'p mut ProgressFn>) -> Self {
        self.progress = progress;
        self
    }

    /// Feed one physical line, with or without its line terminator.
    pub fn feed_line(&mut self, line: &[u8]) {
        self.stats.lines_read += 1;
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        match parse_record_bytes(line) {
            Record::Blank => self.stats.blank_lines += 1,
            Record::Comment => self.stats.comment_lines += 1,
            Record::Malformed => self.stats.malformed_lines += 1,
            Record::Edge(edge) if self.exceeds_cap(&edge) => self.stats.malformed_lines += 1,
            Record::Edge(edge) => self.push_edge(edge),
        }
    }

    /// Accept an edge that is already known to be valid.
    pub fn push_edge(&mut self, edge: Edge) {
        let id = edge.max_id();
        self.max_id = Some(self.max_id.map_or(id, |max| max.max(id)));
        self.edges.push(edge);
        self.stats.valid_edges += 1;

        if self.progress_interval > 0 && self.stats.valid_edges % self.progress_interval == 0 {
            self.report();
        }
    }

    /// Number of edges accepted so far.
    pub fn valid_edges(&self) -> usize {
        self.stats.valid_edges
    }

    fn exceeds_cap(&self, edge: &Edge) -> bool {
        self.max_node_id.is_some_and(|cap| edge.max_id() > cap)
    }

    fn report(&mut self) {
        let snapshot = LoadProgress {
            lines_read: self.stats.lines_read,
            valid_edges: self.stats.valid_edges,
        };
        match self.progress.as_mut() {
            Some(progress) => progress(snapshot),
            None => info!(
                "Read progress: {} valid lines, {} lines read",
                snapshot.valid_edges, snapshot.lines_read
            ),
        }
    }

    /// Finish the pass.
    pub fn finish(self) -> ScannedEdges {
        ScannedEdges {
            edges: self.edges,
            max_id: self.max_id,
            stats: self.stats,
        }
    }
}
