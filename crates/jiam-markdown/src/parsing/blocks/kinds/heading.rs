use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.*)$").expect("valid heading pattern"));

/// ATX-style heading, limited to levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Deepest supported level. `####` and beyond fall through to paragraphs.
    pub const MAX_LEVEL: u8 = 3;

    /// Matches a heading line, returning `(level, text)`.
    ///
    /// The marker run must start the line and be followed by whitespace.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str()).trim();
        Some((level, text))
    }
}
