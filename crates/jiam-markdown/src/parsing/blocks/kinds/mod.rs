//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier asks
//! these types whether a line opens their block; it never hardcodes `#`, `>`
//! or list markers itself.

pub mod block_quote;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
