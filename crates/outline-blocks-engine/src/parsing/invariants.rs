use crate::models::Block;

use super::classify::classify_line;

/// Validates parser output against the lines it was built from.
///
/// Asserts that:
/// - Walking the forest depth-first reproduces every input line, in order,
///   after tab expansion (no line lost, duplicated or reordered)
/// - No block is nested deeper than the number of input lines allows
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<S: AsRef<str>>(raw_lines: &[S], forest: &[Block]) {
    let expected: Vec<String> = raw_lines
        .iter()
        .map(|l| classify_line(l.as_ref()).content)
        .collect();

    let mut seen = Vec::new();
    let mut max_depth = 0;
    collect(forest, 1, &mut seen, &mut max_depth);

    assert_eq!(
        seen.len(),
        expected.len(),
        "forest holds {} lines but input had {}",
        seen.len(),
        expected.len()
    );
    for (i, (got, want)) in seen.iter().zip(&expected).enumerate() {
        assert_eq!(got, want, "line {i} differs in depth-first order");
    }
    assert!(
        max_depth <= expected.len(),
        "nesting depth {} exceeds line count {}",
        max_depth,
        expected.len()
    );
}

fn collect<'a>(blocks: &'a [Block], depth: usize, seen: &mut Vec<&'a str>, max_depth: &mut usize) {
    for block in blocks {
        *max_depth = (*max_depth).max(depth);
        seen.extend(block.content.split('\n'));
        collect(&block.children, depth + 1, seen, max_depth);
    }
}
