use crate::parsing::{
    blocks::{Block, InlineLine, ListKind},
    inline::InlineNode,
    parse_message,
};

/// Renders a message as readable plain text, for speech synthesis.
///
/// Markers are dropped, links keep only their label, rules disappear and
/// nothing is escaped. Blocks are separated by a blank line; list items are
/// prefixed with `- ` or their position (`1. `, `2. `, ...).
pub fn to_plain_text(text: &str) -> String {
    let message = parse_message(text);
    let mut blocks: Vec<String> = Vec::with_capacity(message.blocks.len());

    for block in &message.blocks {
        match block {
            Block::Heading { content, .. } => blocks.push(inline_text(content)),
            Block::BlockQuote { lines } | Block::Paragraph { lines } => {
                blocks.push(join_lines(lines.iter().map(inline_text)));
            }
            Block::ThematicBreak => {}
            Block::List { kind, items } => {
                blocks.push(join_lines(items.iter().enumerate().map(
                    |(i, item)| match kind {
                        ListKind::Unordered => format!("- {}", inline_text(item)),
                        ListKind::Ordered => format!("{}. {}", i + 1, inline_text(item)),
                    },
                )));
            }
        }
    }

    blocks.join("\n\n")
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

fn inline_text(line: &InlineLine<'_>) -> String {
    let mut out = String::new();
    push_text(&mut out, line);
    out
}

fn push_text(out: &mut String, nodes: &[InlineNode<'_>]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) | InlineNode::Code(text) => out.push_str(text),
            InlineNode::Strong(children)
            | InlineNode::Emphasis(children)
            | InlineNode::Strikethrough(children)
            | InlineNode::Link {
                label: children, ..
            } => push_text(out, children),
        }
    }
}
