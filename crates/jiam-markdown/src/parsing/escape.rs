//! Escaping for text placed into markup.

use std::borrow::Cow;

/// Escapes `&`, `<` and `>`, in that order, so entities are never doubled.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a value for a double-quoted attribute: the text escapes plus `"`.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}
