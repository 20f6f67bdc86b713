//! Source location types
//!
//! `Span` tracks where a declaration or template came from, so that parse
//! errors and expansion diagnostics can point back at the offending line.

use serde::Serialize;

/// Span representing a location in source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, col: usize) -> Self {
        Self {
            start,
            end,
            line,
            col,
        }
    }

    /// Span covering a whole source line, skipping its leading whitespace
    pub fn for_line(line_start: usize, raw_line: &str, line: usize) -> Self {
        let indent = raw_line.len() - raw_line.trim_start().len();
        let content_len = raw_line.trim().len();
        Self {
            start: line_start + indent,
            end: line_start + indent + content_len,
            line,
            col: indent + 1,
        }
    }
}
