//! Counters gathered while loading an edge list.

use serde::Serialize;

/// Snapshot handed to a progress reporter while the source is being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadProgress {
    /// Physical lines consumed so far.
    pub lines_read: usize,
    /// Edges accepted so far.
    pub valid_edges: usize,
}

/// Statistics of a completed load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadStats {
    /// Physical lines in the source.
    pub lines_read: usize,
    /// Lines accepted as edges.
    pub valid_edges: usize,
    /// Empty or whitespace-only lines.
    pub blank_lines: usize,
    /// Lines starting with `#`.
    pub comment_lines: usize,
    /// Lines that were neither blank, comment, nor a valid edge.
    pub malformed_lines: usize,
    /// Wall-clock duration of the load in milliseconds.
    pub duration_ms: f64,
    /// When the load finished (Unix epoch microseconds).
    pub loaded_at: u64,
}

impl LoadStats {
    /// Lines that did not produce an edge.
    pub fn skipped_lines(&self) -> usize {
        self.blank_lines + self.comment_lines + self.malformed_lines
    }
}
