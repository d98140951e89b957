//! # Outline Parsing
//!
//! Two-phase parsing of indentation-based outline text into a block forest.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineRecord`
//!    holding local facts only (tab-expanded text, level, bullet flag)
//!
//! 2. **Tree Construction** (`builder`): an `OutlineBuilder` keeps a cursor
//!    path to the last placed block and places every new line relative to it
//!
//! ## Modules
//!
//! - **`classify`**: `OutlineLineClassifier` and `LineRecord`
//! - **`cursor`**: `CursorPath`, the owned index path into the forest
//! - **`builder`**: `OutlineBuilder` state machine
//! - **`normalize`**: strips indentation and bullet markers from parsed content
//! - **`invariants`**: structural checks used by tests
//!
//! ## Key Invariants
//!
//! - No line is ever rejected; odd indentation yields a best-effort tree
//! - Block content keeps each line as read (after tab expansion)
//! - `children` is only ever non-empty when present in the JSON form

pub mod builder;
pub mod classify;
pub mod cursor;
pub mod invariants;
pub mod normalize;

pub use builder::OutlineBuilder;
pub use classify::{BULLET_MARKER, LineRecord, OutlineLineClassifier, classify_line};
pub use normalize::{normalize, normalize_with};

use crate::models::{Block, OutlineOptions};

/// Parse a sequence of raw lines using the default format.
pub fn parse_lines<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with(lines, OutlineOptions::default())
}

/// Parse a sequence of raw lines with explicit format options.
pub fn parse_lines_with<I, S>(lines: I, options: OutlineOptions) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = OutlineBuilder::with_options(options);
    for line in lines {
        builder.push(line.as_ref());
    }
    builder.finish()
}

/// Parse a whole text buffer. Accepts `\n` and `\r\n` line endings.
pub fn parse_str(text: &str) -> Vec<Block> {
    parse_lines(text.lines())
}
