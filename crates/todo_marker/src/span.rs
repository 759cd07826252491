// crates/todo_marker/src/span.rs

use serde::Serialize;

/// Half-open `[start, end)` range of char columns on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// `true` when `column` falls inside the span (the end column is excluded).
    pub fn contains(&self, column: usize) -> bool {
        self.start <= column && column < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The same span moved `by` columns to the right.
    pub fn shifted(self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }
}

/// Converts a byte offset into `line` (which must sit on a char boundary)
/// to a char column.
pub fn char_column(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}

/// Converts a char column back to a byte offset into `line`; columns past
/// the end map to `line.len()`.
pub fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

/// Width of `line` in char columns.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}
