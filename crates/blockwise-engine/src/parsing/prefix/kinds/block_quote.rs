/// Quote prefix: only the outermost `>` counts; nested quotes and callout
/// markers after it are content.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn token_len(s: &str) -> Option<usize> {
        s.starts_with(Self::PREFIX).then_some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quote() {
        assert_eq!(BlockQuote::token_len("> hello"), Some(1));
    }

    #[test]
    fn nested_quote_takes_outer_marker_only() {
        assert_eq!(BlockQuote::token_len("> > hello"), Some(1));
    }

    #[test]
    fn no_quote() {
        assert_eq!(BlockQuote::token_len("hello"), None);
    }
}
