use crate::parsing::prefix::kinds::CodeFence;

use super::normalize::Snap;

pub fn check(snap: &Snap) {
    for l in &snap.lines {
        assert!(
            l.prefix_len <= l.len,
            "prefix longer than line {}: {} > {}",
            l.line,
            l.prefix_len,
            l.len
        );
        if l.kind.as_deref() == Some("Fence") {
            assert_eq!(l.prefix_len, 0, "fence opener with a prefix on line {}", l.line);
        }
        assert!(
            !(l.in_code_block && CodeFence::contains(&l.content)),
            "fence line {} reported inside a code block",
            l.line
        );
    }
}
