//! Error types for the neuronet library.

use thiserror::Error;

/// Errors that can end a graph load.
///
/// Out-of-range node ids are not errors: queries answer them with empty
/// results or `None`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The edge-list source could not be opened or streamed.
    #[error("Cannot read edge list from {source_name}: {source}")]
    SourceUnreadable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The source was readable but held no valid edge line.
    #[error("Edge list is empty or contains no valid edges")]
    EmptyOrInvalidInput,
}

impl GraphError {
    /// Wrap an IO failure on the named source.
    pub fn unreadable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Convenience result type for neuronet operations.
pub type GraphResult<T> = Result<T, GraphError>;
