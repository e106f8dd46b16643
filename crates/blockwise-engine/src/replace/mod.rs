//! # Prefix Replacement
//!
//! Keystroke-driven edits to a line's block prefix:
//!
//! - **`override_match`**: typing a new list prefix right after an old one
//!   replaces the old one
//! - **`suggest`**: completing `- [` checkboxes and `> [!` callouts from a
//!   configured candidate list
//!
//! Both produce an [`Edit`] for the host to apply; neither touches the
//! document itself.

pub mod override_match;
pub mod suggest;

use std::ops::Range;

use serde::Serialize;

use crate::parsing::char_to_byte;

pub use override_match::{OverrideMatch, match_override, try_override};
pub use suggest::{SuggestKind, SuggestTrigger, rank_candidates, trigger_at};

/// Replace the characters in `range` of one line with `text`.
///
/// `range` is in characters, like every column in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
}

impl Edit {
    /// The line as it reads after this edit.
    pub fn apply_to(&self, line: &str) -> String {
        let start = char_to_byte(line, self.range.start);
        let end = char_to_byte(line, self.range.end).max(start);
        format!("{}{}{}", &line[..start], self.text, &line[end..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_character_range() {
        let edit = Edit {
            range: 0..2,
            text: "-".to_string(),
        };
        assert_eq!(edit.apply_to("1. - "), "- - ");
    }

    #[test]
    fn apply_counts_characters() {
        let edit = Edit {
            range: 2..3,
            text: "e".to_string(),
        };
        assert_eq!(edit.apply_to("caé!"), "cae!");
    }

    #[test]
    fn apply_clamps_past_end() {
        let edit = Edit {
            range: 3..10,
            text: "!".to_string(),
        };
        assert_eq!(edit.apply_to("abc"), "abc!");
    }
}
