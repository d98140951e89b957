//! # Outline Serialization
//!
//! Flattens a block forest back into outline text lines.
//!
//! Each block is written at its nesting level `L` (`L` indentation units),
//! and any further lines of its content at either `L` or `L + 1` depending on
//! whether the head is a property line or a bullet:
//!
//! - **Property head** (contains `::`): written as is, blank lines dropped
//! - **Bullet head**: written behind `"- "`, `collapsed:: ` lines dropped
//!
//! Content is expected without indentation or bullet markers; see
//! [`crate::parsing::normalize()`] for turning parser output into that form.

use crate::models::{Block, OutlineOptions};

/// A head line containing this separator is a property line.
pub const PROPERTY_MARKER: &str = "::";

/// Lines with this prefix record UI fold state and are not written back.
pub const COLLAPSED_PREFIX: &str = "collapsed:: ";

#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    options: OutlineOptions,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Lines for `forest`, with root blocks at `level`.
    pub fn serialize(&self, forest: &[Block], level: usize) -> Vec<String> {
        let mut out = Vec::new();
        self.write_blocks(forest, level, &mut out);
        out
    }

    /// The whole forest as one `\n`-joined string.
    pub fn to_text(&self, forest: &[Block]) -> String {
        self.serialize(forest, 0).join("\n")
    }

    fn write_blocks(&self, blocks: &[Block], level: usize, out: &mut Vec<String>) {
        let indent = self.options.indent(level);
        let hanging = self.options.indent(level + 1);

        for block in blocks {
            if !block.content.is_empty() {
                self.write_content(&block.content, &indent, &hanging, out);
            }
            if !block.children.is_empty() {
                self.write_blocks(&block.children, level + 1, out);
            }
        }
    }

    fn write_content(&self, content: &str, indent: &str, hanging: &str, out: &mut Vec<String>) {
        let mut lines = content.split('\n');
        let head = lines.next().unwrap_or_default();

        if head.contains(PROPERTY_MARKER) {
            out.push(format!("{indent}{head}"));
            out.extend(
                lines
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| format!("{indent}{line}")),
            );
        } else {
            out.push(format!("{indent}- {head}"));
            out.extend(
                lines
                    .filter(|line| {
                        self.options.keep_collapsed || !line.starts_with(COLLAPSED_PREFIX)
                    })
                    .map(|line| format!("{hanging}{line}")),
            );
        }
    }
}

/// Serialize with the default format.
pub fn serialize(forest: &[Block], level: usize) -> Vec<String> {
    Serializer::new().serialize(forest, level)
}

/// Serialize with the default format and join into one string.
pub fn to_text(forest: &[Block]) -> String {
    Serializer::new().to_text(forest)
}
