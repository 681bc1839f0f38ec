use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

static UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("valid bullet pattern"));
static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").expect("valid ordered pattern"));

/// A single list item line: a bullet (`-`/`*`) or number-dot marker, then
/// whitespace, then the item text.
pub struct ListItem;

impl ListItem {
    /// Matches a list item line, returning its kind and trimmed text.
    ///
    /// Unordered markers are tried first; the two patterns cannot both match.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        if let Some(caps) = UNORDERED.captures(line) {
            return Some((ListKind::Unordered, capture_text(&caps)));
        }
        if let Some(caps) = ORDERED.captures(line) {
            return Some((ListKind::Ordered, capture_text(&caps)));
        }
        None
    }
}

fn capture_text<'a>(caps: &regex::Captures<'a>) -> &'a str {
    caps.get(1).map_or("", |m| m.as_str()).trim_end()
}
