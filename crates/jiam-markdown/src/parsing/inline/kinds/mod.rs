//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[label](url)` brackets and parentheses
//! - **`Delimited`**: strong (`**`, `__`), emphasis (`*`, `_`) and
//!   strikethrough (`~~`), in precedence order
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod delimited;
pub mod link;

pub use code_span::CodeSpan;
pub use delimited::Delimited;
pub use link::{Link, LinkParts};
