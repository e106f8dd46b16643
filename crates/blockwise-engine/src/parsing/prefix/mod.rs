//! # Prefix Grammar
//!
//! The structural tokens that can start a block line, and the order they are
//! tried in. Each kind owns its delimiter knowledge in [`kinds`]; this module
//! only decides precedence.
//!
//! ## Precedence
//!
//! 1. Checkbox `- [x]`
//! 2. Bullet `-` `*` `+`
//! 3. Number `1.` `1)`
//! 4. Heading `#`..`######`
//! 5. Quote `>`
//! 6. Fence `` ```lang ``
//!
//! The checkbox pattern is a strict superset of the dash bullet, so it must
//! come first. The first kind that matches wins.

pub mod kinds;

use serde::Serialize;

use kinds::{BlockQuote, Bullet, Checkbox, CodeFence, Heading, Number};

/// The separator that must follow a paragraph-style token.
pub const SEPARATOR: char = ' ';

/// A recognised block prefix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixKind {
    Checkbox,
    Bullet,
    Number,
    Heading,
    Quote,
    Fence,
}

/// How a prefix affects "select the content of this block".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixStyle {
    /// The token and one separator space are excluded from the content.
    Paragraph,
    /// A code fence opener; the whole line is handled by the code-block locator.
    Fence,
}

/// Every kind, most specific first.
pub const PRECEDENCE: [PrefixKind; 6] = [
    PrefixKind::Checkbox,
    PrefixKind::Bullet,
    PrefixKind::Number,
    PrefixKind::Heading,
    PrefixKind::Quote,
    PrefixKind::Fence,
];

impl PrefixKind {
    /// Byte length of this kind's token at the very start of `s`.
    ///
    /// Does not look at what follows the token; the separator rule belongs to
    /// the caller.
    pub fn token_len(self, s: &str) -> Option<usize> {
        match self {
            PrefixKind::Checkbox => Checkbox::token_len(s),
            PrefixKind::Bullet => Bullet::token_len(s),
            PrefixKind::Number => Number::token_len(s),
            PrefixKind::Heading => Heading::token_len(s),
            PrefixKind::Quote => BlockQuote::token_len(s),
            PrefixKind::Fence => CodeFence::token_len(s),
        }
    }

    pub fn style(self) -> PrefixStyle {
        match self {
            PrefixKind::Fence => PrefixStyle::Fence,
            _ => PrefixStyle::Paragraph,
        }
    }

    /// Returns the token text when `s` starts with this kind's token followed
    /// by the separator.
    pub fn token_before_separator(self, s: &str) -> Option<&str> {
        let len = self.token_len(s)?;
        s[len..].starts_with(SEPARATOR).then(|| &s[..len])
    }
}
