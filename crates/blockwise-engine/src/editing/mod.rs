/*!
 * # Editing Glue
 *
 * The thin adapter layer between a host editor and the pure algorithms in
 * [`parsing`](crate::parsing), [`selection`](crate::selection) and
 * [`replace`](crate::replace).
 *
 * ## Architecture Overview
 *
 * ### 1. The Host Is a Trait
 * - The host's text surface is modelled by **`Editor`** (line access, cursor,
 *   selections, range replacement, table context, container fallback)
 * - The algorithms only need **`LineSource`**: line count and line text
 * - Nothing here owns the document; every call reads a fresh snapshot
 *
 * ### 2. Commands Are Plain Functions
 * - Each host event maps to one function in **`commands`**
 * - Every command takes the `Settings` by reference; there is no global state
 * - Commands either set new selections or apply one single-line edit
 *
 * ### 3. Fail Closed
 * - A non-match is never an error: commands return `None` or hand over to the
 *   host's own fallback rather than guessing
 *
 * ## Module Structure
 *
 * - **`editor`**: `LineSource` and `Editor` traits
 * - **`commands`**: `select_block`, `handle_keystroke`, `suggest_at_cursor`,
 *   `accept_suggestion`
 * - **`document`**: `TextDocument`, an xi-rope backed in-memory `Editor`
 *
 * ## Usage Pattern
 *
 * ```rust
 * use blockwise_config::Settings;
 * use blockwise_engine::editing::*;
 * use blockwise_engine::selection::{Position, Selection};
 *
 * let mut doc = TextDocument::new("- [ ] buy milk");
 * doc.set_selections(&[Selection::caret(Position::new(0, 9))]);
 *
 * let outcome = select_block(&mut doc, &Settings::default());
 * assert_eq!(
 *     outcome,
 *     SelectOutcome::Expanded(vec![Selection::new(Position::new(0, 6), Position::new(0, 14))])
 * );
 * ```
 */

pub mod commands;
pub mod document;
pub mod editor;

pub use commands::{
    FallbackReason, SelectOutcome, Suggestions, accept_suggestion, handle_keystroke, select_block,
    suggest_at_cursor,
};
pub use document::{DocumentError, TextDocument};
pub use editor::{Editor, LineSource, SelectionContext};
