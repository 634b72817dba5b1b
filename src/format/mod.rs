//! Text edge-list input.

pub mod mmap;
pub mod reader;
pub mod record;
pub mod scanner;

pub use mmap::MmapEdgeList;
pub use reader::EdgeListReader;
pub use record::{parse_record, Record};
pub use scanner::{EdgeScanner, ProgressFn, ScannedEdges};
