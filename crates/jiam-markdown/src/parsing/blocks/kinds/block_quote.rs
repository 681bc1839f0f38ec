/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix from a line, returning the trimmed quote text.
    ///
    /// The prefix must be the first character of the line. One level only:
    /// `>> nested` yields `> nested` as the quoted text.
    ///
    /// # Returns
    /// - `Some(text)`: the line is a quote line; `text` has surrounding
    ///   whitespace removed
    /// - `None`: the line does not start with [`Self::PREFIX`]
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
