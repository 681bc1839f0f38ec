//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over one line of
//! an inline-eligible block at a time (heading text, quote line, list item,
//! paragraph line), so no construct spans lines.
//!
//! Parsing works on the raw text. Escaping `&`, `<` and `>` never creates or
//! removes a delimiter, so escaping each text leaf on output gives the same
//! markup as escaping the line first.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Code, Strong, Emphasis, Strikethrough, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` parses as a single Code
//! node, and a delimiter inside a code span never closes an outer construct.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
