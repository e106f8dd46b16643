use crate::editing::editor::LineSource;
use crate::parsing::classify::prefix_len;

use super::{Position, Selection};

/// Grows every selection to the content of the block(s) it touches.
///
/// One output per input, in the same order. Selections that span several
/// lines (or every selection, when `avoid_prefixes` is false) become whole
/// line ranges, prefixes included. A single-line selection starts right after
/// the line's block prefix and runs to the end of the line.
///
/// Outputs are forward: the anchor is the start and the head is the end.
pub fn expand<L: LineSource + ?Sized>(
    doc: &L,
    selections: &[Selection],
    avoid_prefixes: bool,
) -> Vec<Selection> {
    selections
        .iter()
        .map(|sel| expand_one(doc, sel, avoid_prefixes))
        .collect()
}

fn expand_one<L: LineSource + ?Sized>(doc: &L, sel: &Selection, avoid_prefixes: bool) -> Selection {
    let (from, to) = (sel.from(), sel.to());
    let end = Position::new(to.line, doc.line_len(to.line));

    if !sel.is_single_line() || !avoid_prefixes {
        return Selection::new(Position::new(from.line, 0), end);
    }

    let start = doc.line(from.line).map_or(0, |line| prefix_len(&line));
    Selection::new(Position::new(from.line, start), end)
}
