//! Classification of a single edge-list line.

use crate::types::{Edge, NodeId};

/// What one line of an edge list turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// Empty or whitespace only.
    Blank,
    /// First non-blank character is `#`.
    Comment,
    /// Exactly two non-negative integers.
    Edge(Edge),
    /// Anything else. Skipped, never fatal.
    Malformed,
}

/// Parse one line of text. Trailing `\n` / `\r\n` is ignored.
pub fn parse_record(line: &str) -> Record {
    let content = line.trim();
    if content.is_empty() {
        return Record::Blank;
    }
    if content.starts_with('#') {
        return Record::Comment;
    }

    let mut fields = content.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(origin), Some(destination), None) => {
            match (parse_id(origin), parse_id(destination)) {
                (Some(origin), Some(destination)) => Record::Edge(Edge::new(origin, destination)),
                _ => Record::Malformed,
            }
        }
        _ => Record::Malformed,
    }
}

/// Parse one raw line. Bytes that are not UTF-8 make the line malformed.
pub fn parse_record_bytes(line: &[u8]) -> Record {
    match std::str::from_utf8(line) {
        Ok(text) => parse_record(text),
        Err(_) => Record::Malformed,
    }
}

// Rejects signs other than '+', fractions, and anything past u32::MAX.
fn parse_id(field: &str) -> Option<NodeId> {
    field.parse::<NodeId>().ok()
}
