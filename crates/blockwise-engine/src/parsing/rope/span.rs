use std::ops::Range;

/// Byte range of one line's content in the document buffer, terminator
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Pulls a buffer offset into this line's content.
    #[must_use]
    pub fn clamp(self, offset: usize) -> usize {
        offset.clamp(self.start, self.end)
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}
