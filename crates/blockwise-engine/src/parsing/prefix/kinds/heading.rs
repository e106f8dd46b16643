/// ATX heading marker (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Byte length of the run of `#` at the start of `s`, if it is a valid level.
    ///
    /// Seven or more `#` is not a heading at any level.
    pub fn token_len(s: &str) -> Option<usize> {
        let level = s.chars().take_while(|&c| c == Self::MARKER).count();
        (1..=Self::MAX_LEVEL).contains(&level).then_some(level)
    }
}
