use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// Byte span of the line text without its `\n` or `\r\n` terminator.
    pub content: Span,
}

/// Returns an iterator over the physical lines in the rope.
///
/// Uses `lines_raw` to see the newline characters, so both spans stay exact.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text_len = line.trim_end_matches(['\r', '\n']).len();
        LineRef {
            span: Span::new(start, offset),
            content: Span::new(start, start + text_len),
        }
    })
}

/// Content spans of every editor line.
///
/// Editors show an empty last line after a trailing newline (and one line
/// for an empty buffer), so this adds that line where `lines_raw` does not.
pub fn line_spans(rope: &Rope) -> Vec<Span> {
    let mut spans: Vec<Span> = lines_with_spans(rope).map(|lr| lr.content).collect();
    let len = rope.len();
    let ends_open = spans.last().is_none_or(|last| last.end < len);
    if ends_open {
        spans.push(Span::new(len, len));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_rope_has_one_line() {
        assert_eq!(line_spans(&Rope::from("")), vec![Span::new(0, 0)]);
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(line_spans(&Rope::from("a\nbc")), vec![Span::new(0, 1), Span::new(2, 4)]);
    }

    #[test]
    fn trailing_newline_adds_empty_line() {
        assert_eq!(line_spans(&Rope::from("a\n")), vec![Span::new(0, 1), Span::new(2, 2)]);
    }

    #[test]
    fn crlf_terminators_are_excluded() {
        let rope = Rope::from("a\r\nb");
        let lines: Vec<LineRef> = lines_with_spans(&rope).collect();
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[0].content, Span::new(0, 1));
        assert_eq!(line_spans(&rope), vec![Span::new(0, 1), Span::new(3, 4)]);
    }
}
