use crate::parsing::inline::types::InlineNode;

/// Inline constructs wrapped in a matching pair of delimiters.
///
/// Variants are ordered by precedence. A construct's closer search steps
/// over any complete construct of higher precedence, so `*a **b** c*` is one
/// emphasis span containing a strong span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Delimited {
    /// `**text**` or `__text__`.
    Strong,
    /// `*text*` or `_text_`.
    Emphasis,
    /// `~~text~~`.
    Strikethrough,
}

impl Delimited {
    /// All kinds, in precedence order.
    pub const ALL: [Delimited; 3] = [
        Delimited::Strong,
        Delimited::Emphasis,
        Delimited::Strikethrough,
    ];

    /// Opening delimiters; each closes only with itself.
    pub fn delimiters(self) -> &'static [&'static [u8]] {
        match self {
            Delimited::Strong => &[b"**", b"__"],
            Delimited::Emphasis => &[b"*", b"_"],
            Delimited::Strikethrough => &[b"~~"],
        }
    }

    /// Kinds that take precedence over this one.
    pub fn preceding(self) -> impl Iterator<Item = Delimited> {
        Self::ALL.into_iter().filter(move |k| *k < self)
    }

    /// Wraps parsed children in the node for this kind.
    pub fn node(self, children: Vec<InlineNode<'_>>) -> InlineNode<'_> {
        match self {
            Delimited::Strong => InlineNode::Strong(children),
            Delimited::Emphasis => InlineNode::Emphasis(children),
            Delimited::Strikethrough => InlineNode::Strikethrough(children),
        }
    }
}
