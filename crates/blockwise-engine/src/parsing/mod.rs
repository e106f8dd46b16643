pub mod classify;
pub mod prefix;
pub mod rope;
pub mod snapshot;

pub use classify::{LineClassifier, PrefixMatch, classify, prefix_len};
pub use prefix::{PrefixKind, PrefixStyle};

/// Byte index of character column `ch` in `s`, clamped to the end of `s`.
pub fn char_to_byte(s: &str, ch: usize) -> usize {
    s.char_indices().nth(ch).map_or(s.len(), |(i, _)| i)
}
