pub mod blocks;
pub mod escape;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// A chat message split into blocks with parsed inline content.
///
/// Borrows from the message text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    pub blocks: Vec<Block<'a>>,
}

impl ParsedMessage<'_> {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses a complete message in one forward pass over its lines.
pub fn parse_message(text: &str) -> ParsedMessage<'_> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        builder.push(classifier.classify(line));
    }

    ParsedMessage {
        blocks: builder.finish(),
    }
}
