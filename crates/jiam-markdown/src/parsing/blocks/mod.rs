//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineKind` (heading, blockquote, rule, list item, paragraph, blank)
//!    from local facts only
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps the one open
//!    block (quote, list or paragraph) and emits `Block`s as lines arrive
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, BlockQuote,
//!   ThematicBreak, ListItem, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineKind` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Lines are visited once, strictly forward
//! - An open list is closed before any other block opens and at end of input
//! - A list marker of the other kind starts a new list; lists never merge
//! - No nesting: quotes and lists hold inline content only

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineKind, MarkdownLineClassifier};
pub use types::{Block, InlineLine, ListKind};
