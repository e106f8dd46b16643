pub mod editing;
pub mod parsing;
pub mod replace;
pub mod selection;

// Re-export key types for easier usage
pub use editing::{commands::*, document::*, editor::*};
pub use parsing::{PrefixKind, PrefixMatch, PrefixStyle, classify, prefix_len};
pub use replace::{Edit, OverrideMatch, SuggestKind, SuggestTrigger, match_override, try_override};
pub use selection::{Position, Selection, expand, locate};
