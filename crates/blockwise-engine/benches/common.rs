// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_lines(size: usize) -> Vec<String> {
    let base = [
        "# Title",
        "",
        "## Section",
        "",
        "Paragraph with some content.",
        "",
        "- Bullet point",
        "  - Nested item",
        "- [ ] Open task",
        "- [x] Done task",
        "1. Numbered",
        "> Quoted text",
        "",
        "```rust",
        "fn example() {",
        "    println!(\"Hello\");",
        "}",
        "```",
        "",
    ];
    base.iter()
        .cycle()
        .take(base.len() * size)
        .map(|s| s.to_string())
        .collect()
}
