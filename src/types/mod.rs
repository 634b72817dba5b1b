//! All data types for the neuronet library.

pub mod edge;
pub mod error;
pub mod stats;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use stats::{LoadProgress, LoadStats};

/// Node identifier. Ids are dense-ish over `[0, node_count)`.
pub type NodeId = u32;

/// Default number of valid edges between two progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1_000_000;

/// Bytes per mebibyte, used for human-readable memory figures.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
