/// Horizontal rule: a line made of one repeated rule character.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Characters that may form a rule.
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    /// Minimum run length.
    pub const MIN_RUN: usize = 3;

    /// Returns true if the line, ignoring surrounding whitespace, is a run of
    /// at least [`Self::MIN_RUN`] copies of the same rule character.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::CHARS.contains(&first) && t.len() >= Self::MIN_RUN && chars.all(|c| c == first)
    }
}
