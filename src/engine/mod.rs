//! Traversal engine over a loaded graph.

pub mod query;

pub use query::{TraversalEngine, TraversalParams};
