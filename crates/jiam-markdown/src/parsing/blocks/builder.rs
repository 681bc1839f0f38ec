use crate::parsing::inline::parse_inline;

use super::{
    classify::LineKind,
    types::{Block, InlineLine, ListKind},
};

/// The block currently collecting lines, if any.
///
/// Headings and rules are single-line and never stay open.
#[derive(Debug)]
enum OpenBlock<'a> {
    None,
    BlockQuote(Vec<&'a str>),
    List { kind: ListKind, items: Vec<&'a str> },
    Paragraph(Vec<&'a str>),
}

/// Phase 2 of block parsing: assembles classified lines into [`Block`]s.
///
/// At most one block is open at a time. Every transition closes it through
/// [`BlockBuilder::close`], so a list is always finished before a block of
/// another type starts and before end of input.
pub struct BlockBuilder<'a> {
    open: OpenBlock<'a>,
    out: Vec<Block<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineKind<'a>) {
        match line {
            LineKind::Heading { level, text } => {
                self.close();
                self.out.push(Block::Heading {
                    level,
                    content: parse_inline(text),
                });
            }
            LineKind::BlockQuote(text) => {
                if let OpenBlock::BlockQuote(lines) = &mut self.open {
                    lines.push(text);
                } else {
                    self.close();
                    self.open = OpenBlock::BlockQuote(vec![text]);
                }
            }
            LineKind::ThematicBreak => {
                self.close();
                self.out.push(Block::ThematicBreak);
            }
            LineKind::ListItem { kind, text } => {
                if let OpenBlock::List {
                    kind: open_kind,
                    items,
                } = &mut self.open
                    && *open_kind == kind
                {
                    items.push(text);
                } else {
                    self.close();
                    self.open = OpenBlock::List {
                        kind,
                        items: vec![text],
                    };
                }
            }
            LineKind::Paragraph(text) => {
                if let OpenBlock::Paragraph(lines) = &mut self.open {
                    lines.push(text);
                } else {
                    self.close();
                    self.open = OpenBlock::Paragraph(vec![text]);
                }
            }
            LineKind::Blank => self.close(),
        }
    }

    pub fn finish(mut self) -> Vec<Block<'a>> {
        // EOF flush
        self.close();
        self.out
    }

    /// Kind of the list currently open, if the open block is a list.
    pub fn open_list(&self) -> Option<ListKind> {
        match self.open {
            OpenBlock::List { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Emits the open block, if any, and resets to no open block.
    fn close(&mut self) {
        let block = match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => return,
            OpenBlock::BlockQuote(lines) => Block::BlockQuote {
                lines: parse_lines(&lines),
            },
            OpenBlock::List { kind, items } => Block::List {
                kind,
                items: parse_lines(&items),
            },
            OpenBlock::Paragraph(lines) => Block::Paragraph {
                lines: parse_lines(&lines),
            },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_lines<'a>(lines: &[&'a str]) -> Vec<InlineLine<'a>> {
    lines.iter().copied().map(parse_inline).collect()
}
