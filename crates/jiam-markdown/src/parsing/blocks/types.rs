use crate::parsing::inline::InlineNode;

/// Which marker family a list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` or `*` bullets.
    Unordered,
    /// `1.` style numbers.
    Ordered,
}

/// One line of inline content.
pub type InlineLine<'a> = Vec<InlineNode<'a>>;

/// A top-level block of a parsed message.
///
/// Blocks borrow from the message text; inline content has already been
/// parsed, one [`InlineLine`] per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A `#`, `##` or `###` heading.
    Heading {
        /// 1 to 3.
        level: u8,
        content: InlineLine<'a>,
    },
    /// Consecutive `>` lines.
    BlockQuote { lines: Vec<InlineLine<'a>> },
    /// A horizontal rule.
    ThematicBreak,
    /// Consecutive list items of the same kind.
    List {
        kind: ListKind,
        items: Vec<InlineLine<'a>>,
    },
    /// Consecutive lines that open no other block.
    Paragraph { lines: Vec<InlineLine<'a>> },
}
