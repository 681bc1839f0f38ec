use std::ops::Range;

/// `[label](url)` link with owned delimiter constants.
pub struct Link;

/// Byte ranges of a matched link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts {
    pub label: Range<usize>,
    pub url: Range<usize>,
    /// Exclusive end of the whole construct.
    pub end: usize,
}

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Matches a link opened at `start`.
    ///
    /// The label runs to the first `]` and the url to the first `)`; both
    /// must be non-empty, and `(` must follow `]` directly.
    pub fn scan(s: &[u8], start: usize) -> Option<LinkParts> {
        if s.get(start) != Some(&Self::LABEL_OPEN) {
            return None;
        }
        let label_start = start + 1;
        let label_end = find(s, label_start, Self::LABEL_CLOSE)?;
        if label_end == label_start || s.get(label_end + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let url_start = label_end + 2;
        let url_end = find(s, url_start, Self::URL_CLOSE)?;
        if url_end == url_start {
            return None;
        }
        Some(LinkParts {
            label: label_start..label_end,
            url: url_start..url_end,
            end: url_end + 1,
        })
    }
}

fn find(s: &[u8], from: usize, byte: u8) -> Option<usize> {
    s.get(from..)?
        .iter()
        .position(|&b| b == byte)
        .map(|i| from + i)
}
