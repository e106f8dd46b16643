/// Task checkbox prefix (`- [ ]`, `- [x]`, `- [?]`).
///
/// Built on top of the dash bullet, so it must be tried before
/// [`Bullet`](super::Bullet) or the bullet would win on every checkbox line.
pub struct Checkbox;

impl Checkbox {
    /// Everything up to the status character.
    pub const OPEN: &'static str = "- [";
    /// Closes the status character.
    pub const CLOSE: char = ']';

    /// Byte length of a checkbox token at the start of `s`.
    ///
    /// The status may be any single character, including a space or `]`.
    pub fn token_len(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::OPEN)?;
        let status = rest.chars().next()?;
        let after = &rest[status.len_utf8()..];
        after
            .starts_with(Self::CLOSE)
            .then(|| Self::OPEN.len() + status.len_utf8() + Self::CLOSE.len_utf8())
    }
}
