use crate::models::OutlineOptions;

/// The marker that opens a bullet line once leading whitespace is trimmed.
pub const BULLET_MARKER: &str = "- ";

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of outline parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Indentation units, already shifted left by one for non-bullet lines.
    pub level: usize,
    /// The line text with tabs expanded, otherwise untouched.
    pub content: String,
    /// Whether the trimmed text starts with `"- "`.
    pub is_bullet: bool,
}

impl LineRecord {
    /// Whether the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Classifies individual lines for the tree building phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineLineClassifier {
    options: OutlineOptions,
}

impl OutlineLineClassifier {
    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Classifies a raw line into a [`LineRecord`].
    ///
    /// Tabs count as one indentation unit each. Continuation and property
    /// lines sit one unit inside their owning bullet, so their level is one
    /// less than their raw indentation, clamped at zero.
    pub fn classify(&self, raw: &str) -> LineRecord {
        let unit = self.options.unit();
        let content = raw.replace('\t', &" ".repeat(unit));
        let indent = content.chars().take_while(|c| c.is_whitespace()).count();
        let is_bullet = content.trim().starts_with(BULLET_MARKER);

        let units = indent / unit;
        let level = if is_bullet {
            units
        } else {
            units.saturating_sub(1)
        };

        LineRecord {
            level,
            content,
            is_bullet,
        }
    }
}

/// Classifies a line using the default two-space format.
pub fn classify_line(raw: &str) -> LineRecord {
    OutlineLineClassifier::default().classify(raw)
}
