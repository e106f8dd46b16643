use std::borrow::Cow;

use thiserror::Error;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::editor::{Editor, LineSource, SelectionContext};
use crate::parsing::char_to_byte;
use crate::parsing::rope::{Span, line_spans, slice_to_string};
use crate::selection::{Position, Selection};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Marker that starts a table row.
const TABLE_ROW: char = '|';

/// In-memory host editor over an xi-rope buffer.
///
/// Used by the CLI and the integration tests as the concrete [`Editor`]:
///
/// - **Lossless storage**: the whole document lives in one `xi_rope::Rope`;
///   `text()` returns exactly what was loaded plus applied edits
/// - **Line index**: content spans of every line are cached and rebuilt after
///   each edit, so line lookups never rescan the buffer
/// - **Multi-selection**: an ordered list of selections, clamped to the
///   document, mapped through every edit
/// - **Tables**: a selection anchored on a `|` row reports itself as
///   inside a table
/// - **Fallback**: the nearest editable container is the whole document
pub struct TextDocument {
    /// Rope buffer containing the entire document.
    pub(crate) buffer: Rope,
    /// Content span (terminator excluded) of every line.
    pub(crate) lines: Vec<Span>,
    /// Active selections, primary first.
    pub(crate) selections: Vec<Selection>,
    /// Version counter incremented on each edit (enables change detection).
    pub(crate) version: u64,
}

impl TextDocument {
    /// Create a new document from raw bytes, with a caret at the start.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    pub fn new(text: &str) -> Self {
        let buffer = Rope::from(text);
        let lines = line_spans(&buffer);
        Self {
            buffer,
            lines,
            selections: vec![Selection::caret(Position::default())],
            version: 0,
        }
    }

    /// Get the current text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the current version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Removes every selection, as when the host has lost focus.
    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }

    fn clamp(&self, pos: Position) -> Position {
        let last = self.lines.len().saturating_sub(1);
        let line = pos.line.min(last);
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    fn offset_of(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let span = self.lines[pos.line];
        let text = slice_to_string(&self.buffer, span);
        span.start + char_to_byte(&text, pos.ch)
    }

    fn position_of(&self, offset: usize) -> Position {
        let line = self
            .lines
            .partition_point(|span| span.start <= offset)
            .saturating_sub(1);
        let span = self.lines[line];
        let end = span.clamp(offset);
        let ch = self.buffer.slice_to_cow(span.start..end).chars().count();
        Position::new(line, ch)
    }

    fn is_table_row(&self, line: usize) -> bool {
        self.line(line)
            .is_some_and(|l| l.trim_start().starts_with(TABLE_ROW))
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        let span = self.lines.get(index)?;
        Some(self.buffer.slice_to_cow(span.range()))
    }
}

impl Editor for TextDocument {
    fn cursor(&self) -> Position {
        self.selections.first().map_or_else(Position::default, |s| s.head)
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: &[Selection]) {
        self.selections = selections
            .iter()
            .map(|s| Selection::new(self.clamp(s.anchor), self.clamp(s.head)))
            .collect();
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let (a, b) = (self.offset_of(from), self.offset_of(to));
        let (start, end) = (a.min(b), a.max(b));

        // Selections are kept as offsets across the edit, then mapped back to
        // positions against the new line index.
        let offsets: Vec<(usize, usize)> = self
            .selections
            .iter()
            .map(|s| (self.offset_of(s.anchor), self.offset_of(s.head)))
            .collect();

        let delta: Delta<RopeInfo> =
            Delta::simple_edit(start..end, Rope::from(text), self.buffer.len());
        self.buffer = delta.apply(&self.buffer);
        self.lines = line_spans(&self.buffer);
        self.version += 1;

        let map = |off: usize| {
            if off < start {
                off
            } else if off >= end {
                off - (end - start) + text.len()
            } else {
                start + text.len()
            }
        };
        self.selections = offsets
            .into_iter()
            .map(|(anchor, head)| {
                Selection::new(self.position_of(map(anchor)), self.position_of(map(head)))
            })
            .collect();
    }

    fn range(&self, from: Position, to: Position) -> String {
        let (a, b) = (self.offset_of(from), self.offset_of(to));
        self.buffer.slice_to_cow(a.min(b)..a.max(b)).into_owned()
    }

    fn selection_context(&self) -> Option<SelectionContext> {
        let primary = self.selections.first()?;
        Some(SelectionContext {
            in_table: self.is_table_row(primary.anchor.line),
        })
    }

    fn select_nearest_container(&mut self) {
        let last = self.lines.len().saturating_sub(1);
        let end = Position::new(last, self.line_len(last));
        self.selections = vec![Selection::new(Position::default(), end)];
    }
}
