/// Unordered list bullet.
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    pub fn token_len(s: &str) -> Option<usize> {
        s.starts_with(Self::MARKERS).then_some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_marker() {
        for marker in Bullet::MARKERS {
            assert_eq!(Bullet::token_len(&format!("{marker} item")), Some(1));
        }
    }

    #[test]
    fn not_a_bullet() {
        assert_eq!(Bullet::token_len("item"), None);
        assert_eq!(Bullet::token_len(""), None);
    }
}
