use serde::{Deserialize, Serialize};

/// A node of the outline tree.
///
/// `content` holds one or more newline-joined lines; the first is the head
/// line. Blocks produced by the parser keep their lines exactly as read,
/// including original indentation and bullet marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// An ordered sequence of root blocks.
pub type Forest = Vec<Block>;

impl Block {
    /// Create a leaf block.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Create a block with the given children.
    pub fn with_children(content: impl Into<String>, children: Vec<Block>) -> Self {
        Self {
            content: content.into(),
            children,
        }
    }

    /// The first line of `content`.
    pub fn head(&self) -> &str {
        self.content.split('\n').next().unwrap_or_default()
    }

    /// Append a continuation line to `content`.
    pub fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of blocks in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Block::count).sum::<usize>()
    }
}
