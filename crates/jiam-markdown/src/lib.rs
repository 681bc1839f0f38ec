//! Markdown rendering for Jiam chat messages.
//!
//! Converts the chat dialect (headings up to level 3, blockquotes, flat
//! lists, rules, paragraphs; bold, italic, strikethrough, code spans and
//! links) into HTML for direct display, or into plain text for speech.
//!
//! ```
//! let html = jiam_markdown::render("**hi** there");
//! assert!(html.contains("<strong>hi</strong>"));
//! ```

pub mod parsing;
pub mod render;
pub mod theme;

// Re-export key types for easier usage
pub use parsing::{
    ParsedMessage,
    blocks::{Block, ListKind},
    inline::{InlineNode, parse_inline},
    parse_message,
};
pub use render::{Renderer, render, to_plain_text};
pub use theme::Theme;
