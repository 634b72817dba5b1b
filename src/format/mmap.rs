//! Memory-mapped access to edge-list files.

use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::types::{GraphError, GraphResult};

use super::scanner::EdgeScanner;

/// Read-only memory map over an edge-list file.
pub struct MmapEdgeList {
    // None for zero-length files, which cannot be mapped on every platform.
    mmap: Option<Mmap>,
    path: PathBuf,
}

impl MmapEdgeList {
    /// Open and map an edge-list file.
    pub fn open(path: &Path) -> GraphResult<Self> {
        let name = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| GraphError::unreadable(&name, e))?;
        let len = file
            .metadata()
            .map_err(|e| GraphError::unreadable(&name, e))?
            .len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: the map is read-only and dropped with this struct. A file
            // truncated underneath us by another process is outside our contract.
            Some(unsafe { Mmap::map(&file) }.map_err(|e| GraphError::unreadable(&name, e))?)
        };

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    /// Mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// File size in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path the map was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Feed every line of the mapped file to `scanner`.
    pub fn scan(&self, scanner: &mut EdgeScanner<'_>) {
        let data = self.as_bytes();
        if data.is_empty() {
            return;
        }
        // A final newline terminates the last line; it does not open a new one.
        let body = data.strip_suffix(b"\n").unwrap_or(data);
        for line in body.split(|&b| b == b'\n') {
            scanner.feed_line(line);
        }
    }
}
