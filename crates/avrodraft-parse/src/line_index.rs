use avrodraft_core::types::SourcePos;

/// Precomputed line starts for converting byte offsets into positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// The position of the byte at `offset` (1-based line and column).
    ///
    /// Offsets past the end of the text clamp to the end-of-input
    /// position.
    pub fn pos_at(&self, offset: usize) -> SourcePos {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line] + 1;
        SourcePos::new(line as u32 + 1, column as u32, offset)
    }

    /// The position one past the last byte of the text.
    pub fn end_of_input(&self) -> SourcePos {
        self.pos_at(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let index = LineIndex::new("hello");
        assert_eq!(index.pos_at(0), SourcePos::new(1, 1, 0));
        assert_eq!(index.pos_at(4), SourcePos::new(1, 5, 4));
    }

    #[test]
    fn positions_across_lines() {
        let index = LineIndex::new("ab\ncd\ne");
        assert_eq!(index.pos_at(0), SourcePos::new(1, 1, 0));
        assert_eq!(index.pos_at(2), SourcePos::new(1, 3, 2));
        assert_eq!(index.pos_at(3), SourcePos::new(2, 1, 3));
        assert_eq!(index.pos_at(5), SourcePos::new(2, 3, 5));
        assert_eq!(index.pos_at(6), SourcePos::new(3, 1, 6));
    }

    #[test]
    fn end_of_input_position() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.end_of_input(), SourcePos::new(2, 3, 5));
    }

    #[test]
    fn empty_text() {
        let index = LineIndex::new("");
        assert_eq!(index.end_of_input(), SourcePos::new(1, 1, 0));
        assert_eq!(index.pos_at(10), SourcePos::new(1, 1, 0));
    }

    #[test]
    fn offset_past_end_clamps() {
        let index = LineIndex::new("xy");
        assert_eq!(index.pos_at(99), SourcePos::new(1, 3, 2));
    }

    #[test]
    fn trailing_newline_starts_a_line() {
        let index = LineIndex::new("a\n");
        assert_eq!(index.end_of_input(), SourcePos::new(2, 1, 2));
    }
}
