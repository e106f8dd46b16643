use serde::Serialize;

use crate::editing::editor::LineSource;
use crate::parsing::{char_to_byte, classify::classify, rope::preview};
use crate::selection::code_block_lines;

/// Per-line classification of a document.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

/// Classification of a single line.
#[derive(Debug, Serialize)]
pub struct LineSnap {
    /// Zero-based line index.
    pub line: usize,
    /// Prefix kind (e.g. "Bullet", "Fence"), if any.
    pub kind: Option<String>,
    /// Column where the block content starts.
    pub prefix_len: usize,
    /// Line length in characters.
    pub len: usize,
    /// True if a caret on this line is inside a fenced code block.
    pub in_code_block: bool,
    /// Preview of the content after the prefix (truncated for readability).
    pub content: String,
}

/// Classifies every line of `doc`.
pub fn normalize<L: LineSource + ?Sized>(doc: &L) -> Snap {
    let in_code = code_block_lines(doc);
    let lines = (0..doc.line_count())
        .filter_map(|index| {
            let text = doc.line(index)?;
            let m = classify(&text);
            let prefix_len = m.map_or(0, |m| m.len);
            Some(LineSnap {
                line: index,
                kind: m.map(|m| format!("{:?}", m.kind)),
                prefix_len,
                len: text.chars().count(),
                in_code_block: in_code.get(index).copied().unwrap_or(false),
                content: preview(&text[char_to_byte(&text, prefix_len)..], 60),
            })
        })
        .collect();

    Snap { lines }
}
