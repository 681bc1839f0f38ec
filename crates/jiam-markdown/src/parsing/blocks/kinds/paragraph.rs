/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block for any
/// non-blank line no other block opener matches. Consecutive paragraph lines
/// join into one block, separated by line breaks.
pub struct Paragraph;

impl Paragraph {
    /// Returns true if the line carries no visible content.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }
}
