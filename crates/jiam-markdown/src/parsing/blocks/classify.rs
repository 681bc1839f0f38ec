use super::{
    kinds::{BlockQuote, Heading, ListItem, Paragraph, ThematicBreak},
    types::ListKind,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text slices borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# text` to `### text`.
    Heading { level: u8, text: &'a str },
    /// `> text`, with the prefix stripped and the text trimmed.
    BlockQuote(&'a str),
    /// `---`, `***` or `___`.
    ThematicBreak,
    /// A bullet or numbered item.
    ListItem { kind: ListKind, text: &'a str },
    /// Any other non-blank line.
    Paragraph(&'a str),
    /// Whitespace only.
    Blank,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineKind`].
    ///
    /// Precedence: heading, blockquote, rule, unordered item, ordered item,
    /// paragraph, blank. A trailing `\r` is ignored.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some((level, text)) = Heading::parse(line) {
            return LineKind::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineKind::BlockQuote(text);
        }
        if ThematicBreak::matches(line) {
            return LineKind::ThematicBreak;
        }
        if let Some((kind, text)) = ListItem::parse(line) {
            return LineKind::ListItem { kind, text };
        }
        if Paragraph::is_blank(line) {
            return LineKind::Blank;
        }
        LineKind::Paragraph(line)
    }
}
