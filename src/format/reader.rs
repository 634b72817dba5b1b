//! Streams edge lists from files and readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{GraphError, GraphResult};

use super::scanner::EdgeScanner;

/// Buffered edge-list reader.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Scan an edge-list file line by line.
    pub fn scan_file(path: &Path, scanner: &mut EdgeScanner<'_>) -> GraphResult<()> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| GraphError::unreadable(&name, e))?;
        Self::scan(BufReader::new(file), &name, scanner)
    }

    /// Scan any buffered reader. `source_name` only appears in errors.
    ///
    /// Lines are read as raw bytes so that a stray non-UTF-8 line is skipped
    /// as malformed instead of failing the whole load.
    pub fn scan<R: BufRead>(
        mut reader: R,
        source_name: &str,
        scanner: &mut EdgeScanner<'_>,
    ) -> GraphResult<()> {
        let mut line = Vec::with_capacity(64);
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| GraphError::unreadable(source_name, e))?;
            if read == 0 {
                return Ok(());
            }
            scanner.feed_line(&line);
        }
    }
}
