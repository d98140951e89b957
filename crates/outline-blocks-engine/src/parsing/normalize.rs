use crate::models::{Block, OutlineOptions};

use super::classify::BULLET_MARKER;

/// Strip parser artefacts so a forest can go back through the serializer.
///
/// Parsed content keeps each line as read, indentation and bullet marker
/// included, while the serializer adds both itself. Head lines lose their
/// leading whitespace and `"- "` marker. Remaining lines lose the indentation
/// their block implies (the head's indentation, plus one unit under a
/// bullet) and keep anything deeper.
pub fn normalize(forest: &[Block]) -> Vec<Block> {
    normalize_with(forest, OutlineOptions::default())
}

pub fn normalize_with(forest: &[Block], options: OutlineOptions) -> Vec<Block> {
    forest
        .iter()
        .map(|block| normalize_block(block, options))
        .collect()
}

fn normalize_block(block: &Block, options: OutlineOptions) -> Block {
    let mut lines = block.content.split('\n');
    let raw_head = lines.next().unwrap_or_default();
    let head_indent = leading_whitespace(raw_head);
    let trimmed = raw_head.trim_start();

    let (head, is_bullet) = match trimmed.strip_prefix(BULLET_MARKER) {
        Some(rest) => (rest, true),
        None if trimmed == "-" => ("", true),
        None => (trimmed, false),
    };

    let hanging = if is_bullet {
        head_indent + options.unit()
    } else {
        head_indent
    };

    let mut content = head.to_string();
    for line in lines {
        content.push('\n');
        content.push_str(strip_indent(line, hanging));
    }

    Block {
        content,
        children: normalize_with(&block.children, options),
    }
}

/// Counted in chars with the same predicate the classifier uses for levels.
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove at most `max` leading whitespace chars.
fn strip_indent(line: &str, max: usize) -> &str {
    let bytes: usize = line
        .chars()
        .take(max)
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    &line[bytes..]
}
