use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Delimited, Link},
    types::InlineNode,
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Code spans are raw zones and links are atomic; both are skipped whole by
/// every delimiter search. Then strong beats emphasis, which beats
/// strikethrough (see [`Delimited`]).
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`; unmatched delimiters stay in
/// the text.
///
/// Recursion depth is bounded: the first matching closer ends a construct,
/// so no delimiter can nest inside itself.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut out = vec![];
    let mut cur = Cursor::new(s);
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_any(&mut cur) {
            flush_text(&mut out, &s[text_start..start]);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(InlineNode::Text(text));
    }
}

/// Tries every construct that can start at the cursor, in precedence order.
///
/// On success the cursor is left after the construct; on failure it is not moved.
fn try_parse_any<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    match cur.peek()? {
        CodeSpan::TICK => try_parse_code_span(cur),
        Link::LABEL_OPEN => try_parse_link(cur),
        _ => Delimited::ALL
            .into_iter()
            .find_map(|kind| try_parse_delimited(cur, kind)),
    }
}

fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let s = cur.s;
    let start = cur.pos();
    let close = CodeSpan::closing_tick(s.as_bytes(), start)?;
    cur.seek(close + 1);
    Some(InlineNode::Code(&s[start + 1..close]))
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let s = cur.s;
    let parts = Link::scan(s.as_bytes(), cur.pos())?;
    cur.seek(parts.end);
    Some(InlineNode::Link {
        label: parse_inline(&s[parts.label]),
        url: &s[parts.url],
    })
}

fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, kind: Delimited) -> Option<InlineNode<'a>> {
    let s = cur.s;
    let start = cur.pos();
    let (inner_start, inner_end, end) = delimited_extent(s, start, kind)?;
    cur.seek(end);
    Some(kind.node(parse_inline(&s[inner_start..inner_end])))
}

/// Locates a `kind` construct opened at `start`.
///
/// Returns `(inner_start, inner_end, end)`. The closer is the first occurrence
/// of the same delimiter after at least one byte of content, not counting
/// delimiters inside code spans, links, or higher-precedence constructs.
fn delimited_extent(s: &str, start: usize, kind: Delimited) -> Option<(usize, usize, usize)> {
    let opener = Cursor::at(s, start);
    let delim = kind
        .delimiters()
        .iter()
        .copied()
        .find(|d| opener.starts_with(d))?;
    let inner_start = start + delim.len();

    let mut cur = Cursor::at(s, inner_start);
    while !cur.eof() {
        let pos = cur.pos();
        if let Some(end) = skip_atomic(s, pos, kind) {
            cur.seek(end);
            continue;
        }
        if pos > inner_start && cur.starts_with(delim) {
            return Some((inner_start, pos, pos + delim.len()));
        }
        cur.bump();
    }
    None
}

/// End of a construct at `pos` that a `kind` closer search must step over.
fn skip_atomic(s: &str, pos: usize, kind: Delimited) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.get(pos)? {
        &CodeSpan::TICK => CodeSpan::closing_tick(bytes, pos).map(|close| close + 1),
        &Link::LABEL_OPEN => Link::scan(bytes, pos).map(|parts| parts.end),
        _ => kind
            .preceding()
            .find_map(|k| delimited_extent(s, pos, k))
            .map(|(_, _, end)| end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InlineNode::{Code, Emphasis, Strikethrough, Strong, Text};
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![Text("hello world")]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(parse_inline("`code`"), vec![Code("code")]);
    }

    #[test]
    fn parse_strong_both_delimiters() {
        assert_eq!(parse_inline("**bold**"), vec![Strong(vec![Text("bold")])]);
        assert_eq!(parse_inline("__bold__"), vec![Strong(vec![Text("bold")])]);
    }

    #[test]
    fn strong_is_not_nested_emphasis() {
        let nodes = parse_inline("**bold**");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], Strong(children) if children == &vec![Text("bold")]));
    }

    #[test]
    fn parse_emphasis_both_delimiters() {
        assert_eq!(parse_inline("*it*"), vec![Emphasis(vec![Text("it")])]);
        assert_eq!(parse_inline("_it_"), vec![Emphasis(vec![Text("it")])]);
    }

    #[test]
    fn mixed_delimiters_do_not_pair() {
        assert_eq!(parse_inline("**a__"), vec![Text("**a__")]);
        assert_eq!(parse_inline("*a_"), vec![Text("*a_")]);
    }

    #[test]
    fn parse_strikethrough() {
        assert_eq!(
            parse_inline("a ~~gone~~ b"),
            vec![Text("a "), Strikethrough(vec![Text("gone")]), Text(" b")]
        );
    }

    #[test]
    fn strong_is_non_greedy() {
        assert_eq!(
            parse_inline("**a** and **b**"),
            vec![
                Strong(vec![Text("a")]),
                Text(" and "),
                Strong(vec![Text("b")]),
            ]
        );
    }

    #[test]
    fn emphasis_steps_over_strong() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![Emphasis(vec![
                Text("a "),
                Strong(vec![Text("b")]),
                Text(" c"),
            ])]
        );
    }

    #[test]
    fn strong_contains_emphasis() {
        assert_eq!(
            parse_inline("**a *b* c**"),
            vec![Strong(vec![
                Text("a "),
                Emphasis(vec![Text("b")]),
                Text(" c"),
            ])]
        );
    }

    #[test]
    fn emphasis_closes_on_half_of_unmatched_pair() {
        assert_eq!(
            parse_inline("*a**"),
            vec![Emphasis(vec![Text("a")]), Text("*")]
        );
    }

    #[test]
    fn emphasis_before_strikethrough() {
        assert_eq!(
            parse_inline("*a ~~b* c~~"),
            vec![Emphasis(vec![Text("a ~~b")]), Text(" c~~")]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("see [site](https://example.com)!"),
            vec![
                Text("see "),
                InlineNode::Link {
                    label: vec![Text("site")],
                    url: "https://example.com",
                },
                Text("!"),
            ]
        );
    }

    #[test]
    fn link_label_is_formatted() {
        assert_eq!(
            parse_inline("[**docs**](u)"),
            vec![InlineNode::Link {
                label: vec![Strong(vec![Text("docs")])],
                url: "u",
            }]
        );
    }

    #[test]
    fn link_url_is_raw() {
        assert_eq!(
            parse_inline("[a](http://x.io/a_b_c)"),
            vec![InlineNode::Link {
                label: vec![Text("a")],
                url: "http://x.io/a_b_c",
            }]
        );
    }

    #[test]
    fn strong_wraps_link() {
        assert_eq!(
            parse_inline("**[a](u)**"),
            vec![Strong(vec![InlineNode::Link {
                label: vec![Text("a")],
                url: "u",
            }])]
        );
    }

    #[test]
    fn code_span_suppresses_formatting() {
        assert_eq!(parse_inline("`**not bold**`"), vec![Code("**not bold**")]);
    }

    #[test]
    fn strong_steps_over_code_span() {
        assert_eq!(
            parse_inline("**use `a**b` now**"),
            vec![Strong(vec![Text("use "), Code("a**b"), Text(" now")])]
        );
    }

    #[test]
    fn unclosed_constructs_become_text() {
        assert_eq!(
            parse_inline("**open `tick [label](x"),
            vec![Text("**open `tick [label](x")]
        );
    }

    #[test]
    fn snake_case_becomes_emphasis() {
        assert_eq!(
            parse_inline("snake_case_name"),
            vec![Text("snake"), Emphasis(vec![Text("case")]), Text("name")]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo **wörld** ✓"),
            vec![Text("héllo "), Strong(vec![Text("wörld")]), Text(" ✓")]
        );
    }

    #[test]
    fn same_delimiter_never_nests() {
        assert_eq!(
            parse_inline("~~~~x~~~~"),
            vec![Strikethrough(vec![Text("~~x")]), Text("~~")]
        );
    }
}
