use crate::models::Block;

/// One step of the cursor path: a position in a sibling sequence plus the
/// level of the block found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorFrame {
    pub index: usize,
    pub level: usize,
}

/// Path from the forest root to the most recently placed block.
///
/// Frames are owned indices rather than references, so the builder can hand
/// the forest out mutably while still knowing where it is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CursorPath(pub Vec<CursorFrame>);

impl CursorPath {
    /// A path pointing at the first root block.
    pub fn seed(level: usize) -> Self {
        Self(vec![CursorFrame { index: 0, level }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nesting depth of the current block (1 for root blocks).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Level of the current block, 0 before seeding.
    pub fn level(&self) -> usize {
        self.0.last().map_or(0, |f| f.level)
    }

    /// Move to the parent block. Returns false, leaving the path untouched,
    /// when already at a root block.
    pub fn ascend(&mut self) -> bool {
        if self.0.len() > 1 {
            self.0.pop();
            true
        } else {
            false
        }
    }

    /// Move into a child of the current block.
    pub fn descend(&mut self, frame: CursorFrame) {
        self.0.push(frame);
    }

    /// Move sideways to a sibling of the current block.
    pub fn advance(&mut self, frame: CursorFrame) {
        match self.0.last_mut() {
            Some(last) => *last = frame,
            None => self.0.push(frame),
        }
    }

    /// The block the path points at.
    pub fn resolve_mut<'a>(&self, forest: &'a mut Vec<Block>) -> Option<&'a mut Block> {
        let (last, parents) = self.0.split_last()?;
        walk(parents, forest)?.get_mut(last.index)
    }

    /// The sequence holding the current block and its siblings.
    pub fn siblings_mut<'a>(&self, forest: &'a mut Vec<Block>) -> Option<&'a mut Vec<Block>> {
        let (_, parents) = self.0.split_last()?;
        walk(parents, forest)
    }
}

fn walk<'a>(frames: &[CursorFrame], forest: &'a mut Vec<Block>) -> Option<&'a mut Vec<Block>> {
    let mut seq = forest;
    for frame in frames {
        seq = &mut seq.get_mut(frame.index)?.children;
    }
    Some(seq)
}
