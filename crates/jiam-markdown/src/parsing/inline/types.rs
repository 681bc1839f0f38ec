/// A parsed inline node borrowing from the line it came from.
///
/// Container variants own their children, so the tree is always well nested.
/// Text is stored raw; escaping happens when the tree is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Plain text that isn't part of any special construct.
    Text(&'a str),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    Code(&'a str),
    /// `**text**` or `__text__`.
    Strong(Vec<InlineNode<'a>>),
    /// `*text*` or `_text_`.
    Emphasis(Vec<InlineNode<'a>>),
    /// `~~text~~`.
    Strikethrough(Vec<InlineNode<'a>>),
    /// `[label](url)`.
    Link {
        label: Vec<InlineNode<'a>>,
        url: &'a str,
    },
}
