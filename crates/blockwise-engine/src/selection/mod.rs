//! # Selections
//!
//! Line/column positions, direction-sensitive selections, and the two
//! algorithms that compute new selections from a document snapshot:
//!
//! - **`expand`**: grow each selection to its block's content
//! - **`code_block`**: find the fenced code block around a caret

pub mod code_block;
pub mod expand;

use std::fmt;

use serde::Serialize;

pub use code_block::{code_block_lines, locate};
pub use expand::expand;

/// A zero-based line index and character offset within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// A direction-sensitive range. `anchor` stays put while `head` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// A zero-width selection at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// The end that comes first in the document.
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The end that comes last in the document.
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.head
    }

    pub fn is_single_line(&self) -> bool {
        self.anchor.line == self.head.line
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.anchor, self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_order_by_line_then_ch() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn backwards_selection_normalizes() {
        let sel = Selection::new(Position::new(3, 1), Position::new(1, 5));
        assert_eq!(sel.from(), Position::new(1, 5));
        assert_eq!(sel.to(), Position::new(3, 1));
    }

    #[test]
    fn same_line_tie_breaks_on_ch() {
        let sel = Selection::new(Position::new(0, 8), Position::new(0, 2));
        assert_eq!(sel.from(), Position::new(0, 2));
        assert!(sel.is_single_line());
        assert!(!sel.is_caret());
    }

    #[test]
    fn display_is_line_colon_ch() {
        let sel = Selection::new(Position::new(0, 3), Position::new(0, 11));
        assert_eq!(sel.to_string(), "0:3..0:11");
    }
}
