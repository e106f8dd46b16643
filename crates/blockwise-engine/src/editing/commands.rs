use blockwise_config::Settings;
use serde::Serialize;

use crate::editing::editor::Editor;
use crate::replace::suggest::{SuggestKind, SuggestTrigger, rank_candidates, trigger_at};
use crate::replace::{Edit, try_override};
use crate::selection::{Position, Selection, expand, locate};

/// Why block selection handed over to the host's own broader selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FallbackReason {
    /// The host had no native selection to inspect.
    NoSelectionContext,
    /// The selection is anchored inside a table.
    InTable,
    /// Expansion would not have changed anything.
    Unchanged,
}

/// What [`select_block`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SelectOutcome {
    /// Every selection was expanded to its block content.
    Expanded(Vec<Selection>),
    /// The caret was inside a fenced code block; its interior lines were selected.
    CodeBlock { start: usize, end: usize },
    /// [`Editor::select_nearest_container`] was called instead.
    Fallback(FallbackReason),
}

/// Checkbox or callout candidates for the text before the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub trigger: SuggestTrigger,
    pub candidates: Vec<String>,
}

fn fallback<E: Editor + ?Sized>(editor: &mut E, reason: FallbackReason) -> SelectOutcome {
    log::debug!("select block falling back to nearest container: {reason:?}");
    editor.select_nearest_container();
    SelectOutcome::Fallback(reason)
}

/// Select the content of the block(s) under the current selections.
///
/// Order of decisions:
///
/// 1. No native selection, or one inside a table: host fallback
/// 2. A single selection inside a fenced code block (when enabled): the
///    block's interior lines
/// 3. Otherwise every selection is expanded; if nothing changed and
///    `select_all_if_unchanged` is on, the host fallback runs instead, so a
///    second invocation broadens the selection
pub fn select_block<E: Editor + ?Sized>(editor: &mut E, settings: &Settings) -> SelectOutcome {
    let Some(context) = editor.selection_context() else {
        return fallback(editor, FallbackReason::NoSelectionContext);
    };
    if context.in_table {
        return fallback(editor, FallbackReason::InTable);
    }

    let selections = editor.selections();

    if settings.select_full_code_block
        && let [only] = selections.as_slice()
    {
        let selected = if only.is_caret() {
            String::new()
        } else {
            editor.range(only.from(), only.to())
        };
        if let Some((start, end)) = locate(&*editor, editor.cursor(), &selected) {
            let block = Selection::new(
                Position::new(start, 0),
                Position::new(end, editor.line_len(end)),
            );
            log::debug!("selecting code block interior {start}..={end}");
            editor.set_selections(&[block]);
            return SelectOutcome::CodeBlock { start, end };
        }
    }

    let expanded = expand(&*editor, &selections, settings.select_block_avoids_prefixes);
    if settings.select_all_if_unchanged && expanded == selections {
        return fallback(editor, FallbackReason::Unchanged);
    }

    log::debug!("expanded {} selection(s)", expanded.len());
    editor.set_selections(&expanded);
    SelectOutcome::Expanded(expanded)
}

/// Run after each keystroke: replace an old list prefix with a newly typed one.
///
/// Reads the cursor line as it is after the keystroke. Returns the applied
/// edit, or `None` if the feature is off or nothing matched.
pub fn handle_keystroke<E: Editor + ?Sized>(editor: &mut E, settings: &Settings) -> Option<Edit> {
    if !settings.replace_blocks {
        return None;
    }

    let cursor = editor.cursor();
    let line = editor.line(cursor.line)?.into_owned();
    let edit = try_override(&line, cursor.ch)?;

    log::debug!(
        "replacing prefix on line {} with {:?}",
        cursor.line,
        edit.text
    );
    apply_line_edit(editor, cursor.line, &edit);
    Some(edit)
}

/// Checkbox or callout suggestions for the text before the cursor, best first.
pub fn suggest_at_cursor<E: Editor + ?Sized>(editor: &E, settings: &Settings) -> Option<Suggestions> {
    let cursor = editor.cursor();
    let line = editor.line(cursor.line)?;
    let trigger = trigger_at(&line, cursor.ch)?;

    let pool = match trigger.kind {
        SuggestKind::Checkbox => settings.checkbox_candidates(),
        SuggestKind::Callout => settings.callout_candidates(),
    };
    let candidates = rank_candidates(&pool, &trigger.query);
    Some(Suggestions {
        trigger,
        candidates,
    })
}

/// Insert the chosen suggestion in place of the typed query.
pub fn accept_suggestion<E: Editor + ?Sized>(
    editor: &mut E,
    trigger: &SuggestTrigger,
    choice: &str,
) -> Edit {
    let cursor = editor.cursor();
    let line = editor.line(cursor.line).unwrap_or_default();
    let edit = trigger.completion(&line, cursor.ch, choice);
    apply_line_edit(editor, cursor.line, &edit);
    edit
}

fn apply_line_edit<E: Editor + ?Sized>(editor: &mut E, line: usize, edit: &Edit) {
    editor.replace_range(
        &edit.text,
        Position::new(line, edit.range.start),
        Position::new(line, edit.range.end),
    );
}
