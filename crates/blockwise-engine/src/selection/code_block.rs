use crate::editing::editor::LineSource;
use crate::parsing::prefix::kinds::{CodeFence, FenceSig};

use super::Position;

/// Finds the fenced code block containing `cursor`.
///
/// Returns the inclusive range of interior lines (fence lines excluded), or
/// `None` when the cursor is not inside a well-formed block. A cursor on a
/// fence line, or a `selected_text` that already contains a fence, is never
/// "inside".
///
/// Membership is decided by scanning from the top of the document: a fence
/// with a language tag always opens, a bare fence toggles.
pub fn locate<L: LineSource + ?Sized>(
    doc: &L,
    cursor: Position,
    selected_text: &str,
) -> Option<(usize, usize)> {
    if CodeFence::contains(selected_text) {
        return None;
    }
    let cursor_line = doc.line(cursor.line)?;
    if CodeFence::contains(&cursor_line) {
        return None;
    }

    let mut inside = false;
    for index in 0..=cursor.line {
        let Some(line) = doc.line(index) else { break };
        match CodeFence::sig(&line) {
            Some(FenceSig::Tagged) => inside = true,
            Some(FenceSig::Bare) => inside = !inside,
            None => {}
        }
    }
    if !inside {
        return None;
    }

    let opener = (0..cursor.line)
        .rev()
        .find(|&i| doc.line(i).is_some_and(|l| CodeFence::contains(&l)))?;
    let closer = (cursor.line + 1..doc.line_count())
        .find(|&i| doc.line(i).is_some_and(|l| CodeFence::closes(&l)))?;

    Some((opener + 1, closer - 1))
}

/// For every line, whether [`locate`] would find a block around a caret on it.
///
/// One backward pass records which lines have a closer below them, one
/// forward pass tracks fence parity.
pub fn code_block_lines<L: LineSource + ?Sized>(doc: &L) -> Vec<bool> {
    let lines: Vec<_> = (0..doc.line_count())
        .map(|index| doc.line(index).unwrap_or_default())
        .collect();

    let mut closer_below = vec![false; lines.len()];
    let mut seen = false;
    for (index, line) in lines.iter().enumerate().rev() {
        closer_below[index] = seen;
        seen |= CodeFence::closes(line);
    }

    let mut inside = false;
    lines
        .iter()
        .zip(closer_below)
        .map(|(line, closed)| {
            match CodeFence::sig(line) {
                Some(FenceSig::Tagged) => inside = true,
                Some(FenceSig::Bare) => inside = !inside,
                None => {}
            }
            inside && closed && !CodeFence::contains(line)
        })
        .collect()
}
