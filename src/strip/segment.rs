//! Line segmentation
//!
//! Splits a body into maximal runs of lines that share the same
//! classification. Each run is a [`Block`].

use super::patterns::is_quote_line;

/// Block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// New, non-quoted text
    Content,
    /// Quoted reply content
    Quote,
}

impl BlockKind {
    fn of(line: &str) -> Self {
        if is_quote_line(line) {
            BlockKind::Quote
        } else {
            BlockKind::Content
        }
    }
}

/// A maximal run of consecutive lines of the same kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn new(kind: BlockKind, first: &'a str) -> Self {
        Self {
            kind,
            lines: vec![first],
        }
    }

    /// Number of lines in the block
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Block text with its lines rejoined by `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_quote(&self) -> bool {
        self.kind == BlockKind::Quote
    }
}

/// Split text into alternating content and quote blocks
///
/// Lines are split on `\n` only, so a trailing newline produces a final
/// empty line and `\r` stays attached to its line. Joining the block texts
/// with `\n` reproduces the input.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks: Vec<Block<'_>> = Vec::new();

    for line in text.split('\n') {
        let kind = BlockKind::of(line);
        match blocks.last_mut() {
            Some(current) if current.kind == kind => current.lines.push(line),
            _ => blocks.push(Block::new(kind, line)),
        }
    }

    blocks
}
