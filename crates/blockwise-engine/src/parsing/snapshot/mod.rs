//! # Classification Reports
//!
//! Utilities for inspecting how a whole document classifies, line by line.
//! Used for `insta` snapshot tests and the CLI `classify` command.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a document into a stable, serializable `Snap`
//! - **`invariants`**: Checks that must hold for every report (prefixes within
//!   their line, fence lines never inside a block)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{LineSnap, Snap, normalize};
