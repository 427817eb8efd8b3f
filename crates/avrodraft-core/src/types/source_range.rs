use serde::{Deserialize, Serialize};

use super::source_pos::SourcePos;

/// A half-open span `[start, end)` in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: SourcePos,
    pub end: SourcePos,
}

impl SourceRange {
    pub fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a cursor at `line:column` falls inside this span.
    ///
    /// The start boundary is included, the end boundary is excluded.
    pub fn contains(&self, line: u32, column: u32) -> bool {
        let pos = (line, column);
        let start = (self.start.line, self.start.column);
        let end = (self.end.line, self.end.column);
        start <= pos && pos < end
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
