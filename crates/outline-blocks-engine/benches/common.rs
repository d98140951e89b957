// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline(pages: usize) -> String {
    let base = "title:: Page\ntags:: bench\n\n- Bullet point\n  collapsed:: true\n  - Nested item\n    with a continuation\n    - Deeper item\n- Another item\n\t- Tabbed child\n";
    base.repeat(pages)
}

#[allow(dead_code)]
pub fn generate_deep_outline(depth: usize, breadth: usize) -> String {
    let mut content = String::new();
    for root in 0..breadth {
        for level in 0..depth {
            content.push_str(&"  ".repeat(level));
            content.push_str(&format!("- item {root}.{level}\n"));
        }
    }
    content
}
