/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them,
/// and delimiter searches for other constructs step over them whole.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds the closing tick for a span opened at `start`.
    ///
    /// The content must be at least one byte long, so an empty pair of ticks
    /// is not a span; the first tick after that is the closer.
    pub fn closing_tick(s: &[u8], start: usize) -> Option<usize> {
        if s.get(start) != Some(&Self::TICK) {
            return None;
        }
        let from = start + 2;
        s.get(from..)?
            .iter()
            .position(|&b| b == Self::TICK)
            .map(|i| from + i)
    }
}
