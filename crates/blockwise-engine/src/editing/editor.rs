use std::borrow::Cow;

use crate::selection::{Position, Selection};

/// Read access to a document snapshot, one line at a time.
///
/// Lines never include their terminator. This is all the core algorithms
/// need; they never mutate the document.
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Text of line `index`, or `None` past the end of the document.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;

    /// Length of line `index` in characters (0 past the end).
    fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |l| l.chars().count())
    }
}

impl LineSource for [&str] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|l| Cow::Borrowed(*l))
    }
}

impl LineSource for [String] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|l| Cow::Borrowed(l.as_str()))
    }
}

impl<T> LineSource for Vec<T>
where
    [T]: LineSource,
{
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(index)
    }
}

impl<const N: usize> LineSource for [&str; N] {
    fn line_count(&self) -> usize {
        N
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(index)
    }
}

/// What the host knows about where its native selection sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionContext {
    /// The selection is anchored inside a table, where line-based
    /// expansion makes no sense.
    pub in_table: bool,
}

/// The host text-editing surface.
///
/// A host adapter implements this over its own editor and calls the
/// functions in [`commands`](super::commands) from its event handlers.
pub trait Editor: LineSource {
    /// The primary cursor (head of the primary selection).
    fn cursor(&self) -> Position;

    fn selections(&self) -> Vec<Selection>;

    /// Replaces every active selection.
    fn set_selections(&mut self, selections: &[Selection]);

    /// Replaces the text between `from` and `to` with `text`.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    fn range(&self, from: Position, to: Position) -> String;

    /// `None` when the host has no active native selection to inspect.
    fn selection_context(&self) -> Option<SelectionContext>;

    /// The host's own "select the nearest editable container" command.
    fn select_nearest_container(&mut self);
}
