//! # Rendering
//!
//! Writers over a [`ParsedMessage`](crate::parsing::ParsedMessage):
//!
//! - **`html`**: `Renderer` turns blocks into themed HTML markup
//! - **`plain`**: `to_plain_text` keeps only the readable text

pub mod html;
pub mod plain;

pub use html::{Renderer, render};
pub use plain::to_plain_text;
