use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::parsing::char_to_byte;

use super::Edit;

/// Which popup a trigger opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestKind {
    /// `- [` followed by the status typed so far.
    Checkbox,
    /// `> [!` followed by the callout name typed so far.
    Callout,
}

/// A partial token between a trigger and the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestTrigger {
    pub kind: SuggestKind,
    /// Column where the query starts (just after the trigger).
    pub start: usize,
    /// What has been typed after the trigger.
    pub query: String,
}

impl SuggestTrigger {
    /// Replaces the query with `choice` and closes the bracket.
    ///
    /// `cursor` is the caret column the trigger was matched at in `line`. A
    /// token already closed after the cursor (an auto-inserted `]`, or the
    /// rest of an existing `[ ] `) is replaced too, so the bracket is never
    /// doubled.
    pub fn completion(&self, line: &str, cursor: usize, choice: &str) -> Edit {
        let rest = &line[char_to_byte(line, cursor)..];
        let closed = self
            .kind
            .closing_regex()
            .find(rest)
            .map_or(0, |m| m.as_str().chars().count());
        Edit {
            range: self.start..cursor + closed,
            text: format!("{choice}] "),
        }
    }
}

impl SuggestKind {
    /// Remainder of the token after the cursor, up to its `]` and one space.
    fn closing_regex(self) -> &'static Regex {
        static CHECKBOX_CLOSE: OnceLock<Regex> = OnceLock::new();
        static CALLOUT_CLOSE: OnceLock<Regex> = OnceLock::new();
        match self {
            SuggestKind::Checkbox => CHECKBOX_CLOSE
                .get_or_init(|| Regex::new(r"^[^\]]?\] ?").expect("Invalid checkbox close regex")),
            SuggestKind::Callout => CALLOUT_CLOSE
                .get_or_init(|| Regex::new(r"^[\w-]*\] ?").expect("Invalid callout close regex")),
        }
    }
}

fn checkbox_regex() -> &'static Regex {
    static CHECKBOX_REGEX: OnceLock<Regex> = OnceLock::new();
    CHECKBOX_REGEX
        .get_or_init(|| Regex::new(r"^(\s*- \[)([^\]]?)$").expect("Invalid checkbox trigger regex"))
}

fn callout_regex() -> &'static Regex {
    static CALLOUT_REGEX: OnceLock<Regex> = OnceLock::new();
    CALLOUT_REGEX
        .get_or_init(|| Regex::new(r"^(\s*> ?\[!)([\w-]*)$").expect("Invalid callout trigger regex"))
}

fn match_trigger(regex: &Regex, kind: SuggestKind, line: &str, cursor: usize) -> Option<SuggestTrigger> {
    let typed = &line[..char_to_byte(line, cursor)];
    let caps = regex.captures(typed)?;
    let trigger = caps.get(1)?;
    let query = caps.get(2)?;
    Some(SuggestTrigger {
        kind,
        start: trigger.as_str().chars().count(),
        query: query.as_str().to_string(),
    })
}

/// `- [` plus at most one status character, from line start to the cursor.
pub fn checkbox_trigger(line: &str, cursor: usize) -> Option<SuggestTrigger> {
    match_trigger(checkbox_regex(), SuggestKind::Checkbox, line, cursor)
}

/// `> [!` plus a partial callout name, from line start to the cursor.
pub fn callout_trigger(line: &str, cursor: usize) -> Option<SuggestTrigger> {
    match_trigger(callout_regex(), SuggestKind::Callout, line, cursor)
}

/// Whichever trigger matches the text before the cursor.
pub fn trigger_at(line: &str, cursor: usize) -> Option<SuggestTrigger> {
    checkbox_trigger(line, cursor).or_else(|| callout_trigger(line, cursor))
}

/// Orders candidates for display: an exact (case-insensitive) match for
/// `query` moves to the front, everything else keeps its configured order.
pub fn rank_candidates(candidates: &[String], query: &str) -> Vec<String> {
    let mut ranked = candidates.to_vec();
    if let Some(pos) = ranked.iter().position(|c| c.eq_ignore_ascii_case(query)) {
        let exact = ranked.remove(pos);
        ranked.insert(0, exact);
    }
    ranked
}
