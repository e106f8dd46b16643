use serde::Serialize;

use crate::parsing::prefix::{PrefixKind, SEPARATOR};

use super::Edit;

/// Prefixes that can be replaced. Checkbox first, for the same reason as in
/// the classifier.
const EXISTING: [PrefixKind; 3] = [PrefixKind::Checkbox, PrefixKind::Bullet, PrefixKind::Number];

/// Prefixes that can replace. A checkbox is itself built on a bullet, so
/// accepting it here would apply the bullet twice.
const REPLACEMENT: [PrefixKind; 2] = [PrefixKind::Bullet, PrefixKind::Number];

/// `<indent><existing> <new> ` at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideMatch {
    /// Width of the leading whitespace in characters.
    pub indent: usize,
    /// The prefix token already on the line.
    pub existing: String,
    /// The token typed after it.
    pub new: String,
}

impl OverrideMatch {
    /// Characters from the line start through the space after `new`.
    pub fn len(&self) -> usize {
        self.indent + self.existing.chars().count() + 1 + self.new.chars().count() + 1
    }

    /// True when there is nothing to change.
    pub fn is_noop(&self) -> bool {
        self.existing == self.new
    }

    /// Replaces the existing token with the new one.
    pub fn edit(&self) -> Edit {
        let start = self.indent;
        Edit {
            range: start..start + self.existing.chars().count(),
            text: self.new.clone(),
        }
    }
}

/// Matches an override pattern at the start of `line`.
///
/// Each existing kind is tried in order; if its token matches but no
/// replacement token follows, the next kind gets a chance.
pub fn match_override(line: &str) -> Option<OverrideMatch> {
    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();

    EXISTING.into_iter().find_map(|kind| {
        let existing = kind.token_before_separator(body)?;
        let rest = &body[existing.len() + SEPARATOR.len_utf8()..];
        let new = REPLACEMENT
            .into_iter()
            .find_map(|k| k.token_before_separator(rest))?;
        Some(OverrideMatch {
            indent,
            existing: existing.to_string(),
            new: new.to_string(),
        })
    })
}

/// The edit that replaces an old list prefix with one typed right after it.
///
/// `cursor` is the caret column after the keystroke. The pattern must end
/// exactly there (the space after the new token is the keystroke that
/// completes it), otherwise the user is still typing or editing elsewhere.
pub fn try_override(line: &str, cursor: usize) -> Option<Edit> {
    let m = match_override(line)?;
    if m.len() != cursor || m.is_noop() {
        return None;
    }
    Some(m.edit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn edit(start: usize, end: usize, text: &str) -> Edit {
        Edit {
            range: start..end,
            text: text.to_string(),
        }
    }

    #[test]
    fn bullet_to_number() {
        assert_eq!(try_override("- 1. ", 5), Some(edit(0, 1, "1.")));
    }

    #[rstest]
    #[case(4)]
    #[case(6)]
    #[case(0)]
    fn cursor_must_sit_exactly_at_match_end(#[case] cursor: usize) {
        assert_eq!(try_override("- 1. ", cursor), None);
    }

    #[test]
    fn number_to_bullet_leaves_typed_token() {
        let e = try_override("1. - ", 5).unwrap();
        assert_eq!(e, edit(0, 2, "-"));
        assert_eq!(e.apply_to("1. - "), "- - ");
    }

    #[test]
    fn checkbox_to_number() {
        assert_eq!(try_override("- [ ] 3. ", 9), Some(edit(0, 5, "3.")));
    }

    #[test]
    fn indented_override_keeps_indent() {
        let e = try_override("    * 2) ", 9).unwrap();
        assert_eq!(e, edit(4, 5, "2)"));
        assert_eq!(e.apply_to("    * 2) "), "    2) 2) ");
    }

    #[rstest]
    #[case("- - ", 4)]
    #[case("1. 1. ", 6)]
    #[case("  + + ", 6)]
    fn identical_tokens_are_noop(#[case] line: &str, #[case] cursor: usize) {
        assert!(match_override(line).unwrap().is_noop());
        assert_eq!(try_override(line, cursor), None);
    }

    #[test]
    fn different_bullet_markers_override() {
        assert_eq!(try_override("- * ", 4), Some(edit(0, 1, "*")));
    }

    #[test]
    fn checkbox_is_not_a_replacement() {
        assert_eq!(match_override("- - [ ] "), Some(OverrideMatch {
            indent: 0,
            existing: "-".to_string(),
            new: "-".to_string(),
        }));
        assert_eq!(try_override("1. - [ ] ", 9), None);
    }

    #[test]
    fn missing_trailing_space_does_not_match() {
        assert_eq!(match_override("- 1."), None);
    }

    #[test]
    fn text_after_the_match_is_ignored() {
        let m = match_override("- 1. more").unwrap();
        assert_eq!(m.len(), 5);
        assert_eq!(try_override("- 1. more", 5), Some(edit(0, 1, "1.")));
    }

    #[test]
    fn checkbox_followed_by_text_does_not_match() {
        assert_eq!(match_override("- [x] text"), None);
    }

    #[test]
    fn plain_text_never_matches() {
        assert_eq!(match_override("hello world"), None);
        assert_eq!(try_override("", 0), None);
    }
}
