/// Ordered list number (`1.`, `42)`).
pub struct Number;

impl Number {
    pub const DELIMITERS: [char; 2] = ['.', ')'];

    /// Byte length of the digits plus delimiter at the start of `s`.
    pub fn token_len(s: &str) -> Option<usize> {
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        s[digits..]
            .starts_with(Self::DELIMITERS)
            .then_some(digits + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_delimiter() {
        assert_eq!(Number::token_len("1. item"), Some(2));
    }

    #[test]
    fn paren_delimiter() {
        assert_eq!(Number::token_len("12) item"), Some(3));
    }

    #[test]
    fn digits_without_delimiter() {
        assert_eq!(Number::token_len("2024 was a year"), None);
    }

    #[test]
    fn delimiter_without_digits() {
        assert_eq!(Number::token_len(". item"), None);
    }
}
