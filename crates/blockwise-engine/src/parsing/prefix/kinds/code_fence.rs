/// Backtick code fence.
///
/// A fence followed by a language tag can only open a block. A bare fence
/// (nothing but whitespace after the backticks) may open or close one, so
/// callers that track block membership must use parity for bare fences.
pub struct CodeFence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    /// Backticks with nothing but whitespace after them.
    Bare,
    /// Backticks followed by a language tag.
    Tagged,
}

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Classifies `s` as a fence line, ignoring leading and trailing whitespace.
    pub fn sig(s: &str) -> Option<FenceSig> {
        let rest = s.trim().strip_prefix(Self::BACKTICKS)?;
        if rest.is_empty() {
            Some(FenceSig::Bare)
        } else {
            Some(FenceSig::Tagged)
        }
    }

    /// Byte length of the backticks when `s` opens a tagged fence.
    ///
    /// Bare fences are closers as far as block prefixes are concerned.
    pub fn token_len(s: &str) -> Option<usize> {
        match Self::sig(s)? {
            FenceSig::Tagged => Some(Self::BACKTICKS.len()),
            FenceSig::Bare => None,
        }
    }

    /// True if the line contains a fence anywhere.
    pub fn contains(s: &str) -> bool {
        s.contains(Self::BACKTICKS)
    }

    /// True if the line ends with a fence, ignoring trailing whitespace.
    pub fn closes(s: &str) -> bool {
        s.trim_end().ends_with(Self::BACKTICKS)
    }
}
