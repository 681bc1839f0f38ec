use crate::{
    parsing::{
        blocks::{Block, InlineLine, ListKind},
        escape::{escape_attribute, escape_text},
        inline::InlineNode,
        parse_message,
    },
    theme::Theme,
};

/// Renders messages to HTML with a given [`Theme`].
///
/// Holds no per-message state; one renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders a complete message. Never fails; empty input gives empty output.
    ///
    /// Block markups are collected first and joined once, separated by `\n`.
    pub fn render(&self, text: &str) -> String {
        let message = parse_message(text);
        let blocks: Vec<String> = message
            .blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect();
        log::debug!(
            "rendered {} blocks from {} bytes of input",
            blocks.len(),
            text.len()
        );
        blocks.join("\n")
    }

    /// Renders one block to its markup.
    pub fn render_block(&self, block: &Block<'_>) -> String {
        let mut out = String::new();
        match block {
            Block::Heading { level, content } => {
                let tag = heading_tag(*level);
                open_tag(&mut out, tag, self.theme.heading(*level));
                self.write_inline(&mut out, content);
                close_tag(&mut out, tag);
            }
            Block::BlockQuote { lines } => {
                open_tag(&mut out, "blockquote", &self.theme.block_quote);
                self.write_lines(&mut out, lines);
                close_tag(&mut out, "blockquote");
            }
            Block::ThematicBreak => open_tag(&mut out, "hr", &self.theme.thematic_break),
            Block::List { kind, items } => {
                let (tag, class) = match kind {
                    ListKind::Unordered => ("ul", &self.theme.unordered_list),
                    ListKind::Ordered => ("ol", &self.theme.ordered_list),
                };
                open_tag(&mut out, tag, class);
                for item in items {
                    open_tag(&mut out, "li", &self.theme.list_item);
                    self.write_inline(&mut out, item);
                    close_tag(&mut out, "li");
                }
                close_tag(&mut out, tag);
            }
            Block::Paragraph { lines } => {
                open_tag(&mut out, "p", &self.theme.paragraph);
                self.write_lines(&mut out, lines);
                close_tag(&mut out, "p");
            }
        }
        out
    }

    /// Writes lines of one block separated by line breaks.
    fn write_lines(&self, out: &mut String, lines: &[InlineLine<'_>]) {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str("<br>");
            }
            self.write_inline(out, line);
        }
    }

    fn write_inline(&self, out: &mut String, nodes: &[InlineNode<'_>]) {
        for node in nodes {
            match node {
                InlineNode::Text(text) => out.push_str(&escape_text(text)),
                InlineNode::Code(code) => {
                    open_tag(out, "code", &self.theme.code);
                    out.push_str(&escape_text(code));
                    close_tag(out, "code");
                }
                InlineNode::Strong(children) => self.write_wrapped(out, "strong", children),
                InlineNode::Emphasis(children) => self.write_wrapped(out, "em", children),
                InlineNode::Strikethrough(children) => self.write_wrapped(out, "del", children),
                InlineNode::Link { label, url } => {
                    out.push_str("<a href=\"");
                    out.push_str(&escape_attribute(url));
                    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\"");
                    push_class(out, &self.theme.link);
                    out.push('>');
                    self.write_inline(out, label);
                    close_tag(out, "a");
                }
            }
        }
    }

    fn write_wrapped(&self, out: &mut String, tag: &str, children: &[InlineNode<'_>]) {
        open_tag(out, tag, "");
        self.write_inline(out, children);
        close_tag(out, tag);
    }
}

/// Renders a message with the default theme.
pub fn render(text: &str) -> String {
    Renderer::default().render(text)
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        _ => "h3",
    }
}

fn open_tag(out: &mut String, tag: &str, class: &str) {
    out.push('<');
    out.push_str(tag);
    push_class(out, class);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_class(out: &mut String, class: &str) {
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attribute(class));
        out.push('"');
    }
}
