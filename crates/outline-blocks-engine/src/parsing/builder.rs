use log::{debug, trace, warn};

use crate::models::{Block, OutlineOptions};

use super::{
    classify::{LineRecord, OutlineLineClassifier},
    cursor::{CursorFrame, CursorPath},
};

/// Line-at-a-time state machine that grows a forest from classified lines.
///
/// The cursor tracks the most recently placed block. Each new line is placed
/// relative to it by comparing levels: deeper lines become children, equal
/// lines become siblings, shallower lines walk the cursor up until they fit.
/// Non-bullet lines that don't follow a blank line are merged into the
/// current block instead.
pub struct OutlineBuilder {
    classifier: OutlineLineClassifier,
    cursor: CursorPath,
    after_blank: bool,
    out: Vec<Block>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    pub fn with_options(options: OutlineOptions) -> Self {
        Self {
            classifier: OutlineLineClassifier::new(options),
            cursor: CursorPath::default(),
            after_blank: false,
            out: vec![],
        }
    }

    /// Classify and place one raw line.
    pub fn push(&mut self, raw: &str) {
        let line = self.classifier.classify(raw);
        self.push_record(line);
    }

    /// Place an already classified line.
    pub fn push_record(&mut self, line: LineRecord) {
        trace!("line {line:?}");
        let blank = line.is_blank();

        if self.cursor.is_empty() {
            self.seed(line);
        } else if line.is_bullet || blank || self.after_blank {
            self.place(line);
        } else {
            self.continue_current(&line.content);
        }

        self.after_blank = blank;
    }

    /// The forest built so far, without consuming the builder.
    pub fn blocks(&self) -> &[Block] {
        &self.out
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }

    fn seed(&mut self, line: LineRecord) {
        self.out.push(Block::new(line.content));
        self.cursor = CursorPath::seed(line.level);
    }

    fn place(&mut self, line: LineRecord) {
        while line.level < self.cursor.level() {
            if !self.cursor.ascend() {
                debug!(
                    "level {} is shallower than every root, placing as root sibling",
                    line.level
                );
                break;
            }
        }

        if line.level > self.cursor.level() {
            self.place_child(line);
        } else {
            self.place_sibling(line);
        }
    }

    fn place_child(&mut self, line: LineRecord) {
        let Some(parent) = self.cursor.resolve_mut(&mut self.out) else {
            self.recover(line);
            return;
        };
        parent.children.push(Block::new(line.content));
        let index = parent.children.len() - 1;
        debug!("child {index} at level {}", line.level);
        self.cursor.descend(CursorFrame {
            index,
            level: line.level,
        });
    }

    fn place_sibling(&mut self, line: LineRecord) {
        let Some(siblings) = self.cursor.siblings_mut(&mut self.out) else {
            self.recover(line);
            return;
        };
        siblings.push(Block::new(line.content));
        let index = siblings.len() - 1;
        debug!("sibling {index} at level {}", line.level);
        self.cursor.advance(CursorFrame {
            index,
            level: line.level,
        });
    }

    fn continue_current(&mut self, content: &str) {
        match self.cursor.resolve_mut(&mut self.out) {
            Some(block) => block.push_line(content),
            None => warn!("cursor lost its block, dropping continuation {content:?}"),
        }
    }

    /// Cursor and forest disagree; start a fresh root block so no line is lost.
    fn recover(&mut self, line: LineRecord) {
        warn!("cursor {:?} no longer resolves, restarting at root", self.cursor);
        self.out.push(Block::new(line.content));
        self.cursor = CursorPath(vec![CursorFrame {
            index: self.out.len() - 1,
            level: line.level,
        }]);
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
