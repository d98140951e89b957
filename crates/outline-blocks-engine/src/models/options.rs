/// Spaces per indentation unit in the outline format.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Format knobs shared by the parser, serializer and normalizer.
///
/// The defaults describe the standard outline format: two spaces per level,
/// tabs expanded to two spaces, `collapsed::` lines dropped on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Spaces per indentation unit; also the width a tab expands to.
    pub indent_width: usize,
    /// Keep `collapsed:: ` lines when serializing.
    pub keep_collapsed: bool,
}

impl OutlineOptions {
    /// Indentation unit, never zero.
    pub fn unit(&self) -> usize {
        self.indent_width.max(1)
    }

    /// Whitespace for `levels` indentation units.
    pub fn indent(&self, levels: usize) -> String {
        " ".repeat(self.unit() * levels)
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            keep_collapsed: false,
        }
    }
}
