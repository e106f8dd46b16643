use serde::Serialize;

use super::prefix::{PRECEDENCE, PrefixKind, PrefixStyle};

/// The block prefix found at the start of a single line.
///
/// Lengths are in characters, not bytes, so they can be used directly as
/// column offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixMatch {
    /// Which token matched.
    pub kind: PrefixKind,
    /// Width of the leading whitespace.
    pub indent: usize,
    /// Indentation + token + one separator space, or 0 for fence openers.
    pub len: usize,
}

impl PrefixMatch {
    pub fn style(&self) -> PrefixStyle {
        self.kind.style()
    }
}

/// Classifies individual lines by their block prefix.
///
/// Each line is classified on its own, without reference to surrounding
/// lines. Fence membership is the code-block locator's job.
pub struct LineClassifier;

impl LineClassifier {
    /// Returns the first prefix kind (in precedence order) that matches `line`.
    ///
    /// Paragraph-style kinds only match when the token is followed by a space.
    /// A kind whose token is present without the space is skipped and the
    /// next kind is tried, so `- [x]done` is a bullet with prefix `- `.
    pub fn classify(&self, line: &str) -> Option<PrefixMatch> {
        let body = line.trim_start();
        let indent = line[..line.len() - body.len()].chars().count();

        PRECEDENCE.into_iter().find_map(|kind| match kind.style() {
            PrefixStyle::Paragraph => {
                let token = kind.token_before_separator(body)?;
                Some(PrefixMatch {
                    kind,
                    indent,
                    len: indent + token.chars().count() + 1,
                })
            }
            PrefixStyle::Fence => {
                kind.token_len(body)?;
                Some(PrefixMatch {
                    kind,
                    indent,
                    len: 0,
                })
            }
        })
    }
}

/// Convenience for [`LineClassifier::classify`].
pub fn classify(line: &str) -> Option<PrefixMatch> {
    LineClassifier.classify(line)
}

/// Column where the block content starts: the prefix length, or 0 when the
/// line has no recognised prefix.
pub fn prefix_len(line: &str) -> usize {
    classify(line).map_or(0, |m| m.len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", PrefixKind::Bullet, 2)]
    #[case("* item", PrefixKind::Bullet, 2)]
    #[case("+ item", PrefixKind::Bullet, 2)]
    #[case("1. item", PrefixKind::Number, 3)]
    #[case("10) item", PrefixKind::Number, 4)]
    #[case("- [ ] task", PrefixKind::Checkbox, 6)]
    #[case("- [x] task", PrefixKind::Checkbox, 6)]
    #[case("# Title", PrefixKind::Heading, 2)]
    #[case("###### Title", PrefixKind::Heading, 7)]
    #[case("> quoted", PrefixKind::Quote, 2)]
    fn paragraph_prefixes(#[case] line: &str, #[case] kind: PrefixKind, #[case] len: usize) {
        let m = classify(line).unwrap();
        assert_eq!(m.kind, kind);
        assert_eq!(m.len, len);
        assert_eq!(m.style(), PrefixStyle::Paragraph);
    }

    #[rstest]
    #[case("  - item", 2, 4)]
    #[case("\t1. item", 1, 4)]
    #[case("    - [x] nested task", 4, 10)]
    #[case("   > indented quote", 3, 5)]
    fn indentation_is_part_of_prefix(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] len: usize,
    ) {
        let m = classify(line).unwrap();
        assert_eq!(m.indent, indent);
        assert_eq!(m.len, len);
    }

    #[rstest]
    #[case("plain paragraph")]
    #[case("")]
    #[case("   ")]
    #[case("-item")]
    #[case("1.item")]
    #[case("#hashtag")]
    #[case("####### too deep")]
    #[case(">quote without space")]
    #[case("2024 was a year")]
    #[case("```")]
    #[case("```   ")]
    fn no_prefix(#[case] line: &str) {
        assert_eq!(classify(line), None);
        assert_eq!(prefix_len(line), 0);
    }

    #[test]
    fn checkbox_wins_over_bullet() {
        assert_eq!(classify("- [ ] task").unwrap().kind, PrefixKind::Checkbox);
    }

    #[test]
    fn checkbox_without_space_falls_back_to_bullet() {
        let m = classify("- [x]done").unwrap();
        assert_eq!(m.kind, PrefixKind::Bullet);
        assert_eq!(m.len, 2);
    }

    #[test]
    fn only_one_separator_space_is_consumed() {
        assert_eq!(prefix_len("-   spaced"), 2);
    }

    #[test]
    fn prefix_only_line() {
        assert_eq!(prefix_len("- "), 2);
        assert_eq!(prefix_len("- [ ] "), 6);
    }

    #[test]
    fn fence_opener_has_zero_length() {
        let m = classify("```python").unwrap();
        assert_eq!(m.kind, PrefixKind::Fence);
        assert_eq!(m.style(), PrefixStyle::Fence);
        assert_eq!(m.len, 0);
    }

    #[test]
    fn multibyte_indentation_counts_characters() {
        // U+3000 IDEOGRAPHIC SPACE is whitespace and three bytes wide
        let m = classify("\u{3000}- item").unwrap();
        assert_eq!(m.indent, 1);
        assert_eq!(m.len, 3);
    }

    #[test]
    fn prefix_length_law_holds_for_every_kind() {
        let tokens = ["- [ ]", "-", "*", "+", "7.", "7)", "##", ">"];
        let indents = ["", " ", "  ", "\t", " \t "];
        for token in tokens {
            for indent in indents {
                let line = format!("{indent}{token} content");
                assert_eq!(
                    prefix_len(&line),
                    indent.chars().count() + token.chars().count() + 1,
                    "line {line:?}"
                );
            }
        }
    }
}
