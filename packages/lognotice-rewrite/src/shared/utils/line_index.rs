//! Line/column to byte offset mapping
//!
//! Columns are byte offsets within a line, matching tree-sitter `Point`s.

use std::ops::Range;

use crate::shared::models::Span;

/// Byte offset of the start of every line in a text
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Byte offset for a 1-indexed line and 0-indexed byte column
    pub fn offset(&self, line: u32, col: u32) -> Option<usize> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let line_end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.len);
        let offset = start + col as usize;
        (offset <= line_end).then_some(offset)
    }

    /// Byte range covered by a span, or `None` if it falls outside the text
    pub fn byte_range(&self, span: &Span) -> Option<Range<usize>> {
        let start = self.offset(span.start_line, span.start_col)?;
        let end = self.offset(span.end_line, span.end_col)?;
        (start <= end).then_some(start..end)
    }
}
